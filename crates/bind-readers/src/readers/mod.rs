//! Lectores incluidos y sus identificadores estables.

pub mod json;
pub mod scalar;
pub mod text;

pub use json::JsonReader;
pub use scalar::{BooleanReader, FloatReader, IntegerReader};
pub use text::TextReader;

use bind_core::DataType;

pub const TEXT: &str = "text";
pub const INTEGER: &str = "integer";
pub const FLOAT: &str = "float";
pub const BOOLEAN: &str = "boolean";
pub const JSON: &str = "json";

/// Identificador del lector por defecto de un tipo, si lo hay.
pub fn default_reader_id(data_type: &DataType) -> Option<&'static str> {
    match data_type {
        DataType::Text => Some(TEXT),
        DataType::Integer => Some(INTEGER),
        DataType::Float => Some(FLOAT),
        DataType::Boolean => Some(BOOLEAN),
        DataType::Json => Some(JSON),
        DataType::Named(_) => None,
    }
}
