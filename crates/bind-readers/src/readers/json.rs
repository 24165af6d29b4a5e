use bind_core::DataType;
use serde_json::Value;

use crate::errors::ConversionError;
use crate::reader::{RawValue, ValueReader};

/// Parsea el valor como documento JSON (body o token).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReader;

impl ValueReader for JsonReader {
    fn read(&self, raw: RawValue<'_>, target: &DataType) -> Result<Value, ConversionError> {
        let parsed: Result<Value, serde_json::Error> = match raw {
            RawValue::Body(bytes) => serde_json::from_slice(bytes),
            RawValue::Token(s) => serde_json::from_str(s),
        };
        parsed.map_err(|e| {
            let input = raw.as_text(target).map(|t| t.into_owned()).unwrap_or_else(|err| err.input);
            ConversionError::new(input, target.type_name(), e.to_string())
        })
    }
}
