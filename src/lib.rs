//! restbind: capa de binding de parámetros para dispatch REST.
//!
//! Este crate actúa como fachada del workspace:
//! - Re-exporta el modelo de descriptores de `bind-core`.
//! - Re-exporta lectores y registro de `bind-readers`.
//! - Expone `registration` para registrar handlers y convertir argumentos.
//! - Expone `errors` con el error agregado `CoreError`.

pub mod errors;
pub mod registration;

pub use bind_core::{
    BindingError, DataType, DescriptorParts, HandlerParameters, ParameterDescriptor, ParameterSource, ReaderId,
    ResolvedParameters,
};
pub use bind_readers::{ConversionError, RawValue, ReaderConfig, ReaderError, ReaderRegistry, ValueReader, DEFAULT_READERS};
pub use errors::CoreError;
pub use registration::{bind_arguments, parse_candidate, register_handler};
