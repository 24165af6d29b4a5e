use bind_core::DataType;
use serde_json::Value;

use crate::errors::ConversionError;
use crate::reader::{RawValue, ValueReader};

/// Devuelve el valor tal cual como string JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReader;

impl ValueReader for TextReader {
    fn read(&self, raw: RawValue<'_>, target: &DataType) -> Result<Value, ConversionError> {
        Ok(Value::String(raw.as_text(target)?.into_owned()))
    }
}
