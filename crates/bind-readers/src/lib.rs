//! bind-readers: conversión de valores crudos de la petición
//!
//! Este crate provee:
//! - El contrato `ValueReader` (string/body -> `serde_json::Value`).
//! - Lectores incluidos para los `DataType` básicos.
//! - `ReaderRegistry`, que resuelve el lector de cada descriptor por
//!   `ReaderId` y valida las rutas en el registro.
//! - `ReaderConfig`, cargada desde variables de entorno (.env).
//!
//! Nota: `bind-core` sólo guarda el `ReaderId`; la conversión la invoca el
//! loop de dispatch a través de `ReaderRegistry::read`.

pub mod config;
pub mod errors;
pub mod reader;
pub mod readers;
pub mod registry;

pub use config::ReaderConfig;
pub use errors::{ConversionError, ReaderError};
pub use reader::{RawValue, ValueReader};
pub use registry::{ReaderRegistry, DEFAULT_READERS};
