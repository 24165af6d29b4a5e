//! Contrato para lectores de valores.
//!
//! Un `ValueReader` recibe el valor crudo extraído de la petición y el tipo
//! que declara el argumento, y devuelve el valor convertido. Los lectores
//! deben ser deterministas y no tener efectos secundarios: se comparten entre
//! todas las peticiones concurrentes.

use bind_core::DataType;
use serde_json::Value;
use std::borrow::Cow;

use crate::errors::ConversionError;

/// Valor crudo tal como sale de la petición.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue<'a> {
    /// Token de path o query.
    Token(&'a str),
    /// Contenido del body.
    Body(&'a [u8]),
}

impl<'a> RawValue<'a> {
    /// Vista textual del valor; el body debe ser UTF-8.
    pub fn as_text(&self, target: &DataType) -> Result<Cow<'a, str>, ConversionError> {
        match *self {
            RawValue::Token(s) => Ok(Cow::Borrowed(s)),
            RawValue::Body(bytes) => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| ConversionError::new(String::from_utf8_lossy(bytes), target.type_name(), e.to_string())),
        }
    }
}

/// Trait para lectores de valores.
pub trait ValueReader: Send + Sync + std::fmt::Debug {
    /// Convierte `raw` al tipo `target`.
    fn read(&self, raw: RawValue<'_>, target: &DataType) -> Result<Value, ConversionError>;
}
