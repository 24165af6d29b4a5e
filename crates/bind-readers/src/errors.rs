//! Errores de conversión y de resolución de lectores.

use bind_core::ReaderId;
use thiserror::Error;

/// Un valor crudo no se pudo convertir al tipo declarado.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("can't convert '{input}' to {target}: {reason}")]
pub struct ConversionError {
    pub input: String,
    pub target: String,
    pub reason: String,
}

impl ConversionError {
    pub fn new(input: impl Into<String>, target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { input: input.into(), target: target.into(), reason: reason.into() }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("unknown value reader: {0}")]
    UnknownReader(ReaderId),
    #[error("value reader already registered: {0}")]
    DuplicateReader(ReaderId),
    #[error("no default value reader for type {0}")]
    NoDefaultReader(String),
    #[error("parameter {0} is not bound to an argument")]
    Unbound(String),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_error_format() {
        let err = ConversionError::new("abc", "integer", "invalid digit found in string");
        assert_eq!(err.to_string(), "can't convert 'abc' to integer: invalid digit found in string");
    }

    #[test]
    fn conversion_wraps_transparently() {
        let err: ReaderError = ConversionError::new("x", "boolean", "expected true or false").into();
        assert_eq!(err.to_string(), "can't convert 'x' to boolean: expected true or false");
    }
}
