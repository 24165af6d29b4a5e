//! bind-core: modelo de descriptores de parámetros para el dispatch REST.
//!
//! Este crate define de dónde sale el valor de cada argumento de un handler
//! (`ParameterSource`), la regla de binding de un argumento
//! (`ParameterDescriptor`) y el plegado de candidatos parciales en un único
//! descriptor por argumento (`HandlerParameters` -> `ResolvedParameters`).
//!
//! La conversión de valores no vive aquí: el descriptor sólo guarda la
//! referencia (`ReaderId`) al lector que debe usarse.
pub mod data_type;
pub mod descriptor;
pub mod errors;
pub mod route;
pub mod source;

pub use data_type::{DataType, ReaderId};
pub use descriptor::{merge_descriptors, ArgumentBinding, DescriptorParts, ParameterDescriptor};
pub use errors::BindingError;
pub use route::{HandlerParameters, ResolvedParameters};
pub use source::ParameterSource;
