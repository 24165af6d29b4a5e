//! Lectores de escalares: enteros, flotantes y booleanos.

use bind_core::DataType;
use serde_json::{Number, Value};

use crate::errors::ConversionError;
use crate::reader::{RawValue, ValueReader};

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerReader;

impl ValueReader for IntegerReader {
    fn read(&self, raw: RawValue<'_>, target: &DataType) -> Result<Value, ConversionError> {
        let text = raw.as_text(target)?;
        text.parse::<i64>()
            .map(Value::from)
            .map_err(|e| ConversionError::new(&*text, target.type_name(), e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatReader;

impl ValueReader for FloatReader {
    fn read(&self, raw: RawValue<'_>, target: &DataType) -> Result<Value, ConversionError> {
        let text = raw.as_text(target)?;
        let value = text
            .parse::<f64>()
            .map_err(|e| ConversionError::new(&*text, target.type_name(), e.to_string()))?;
        // NaN e infinitos no tienen representación JSON
        Number::from_f64(value)
            .map(Value::Number)
            .ok_or_else(|| ConversionError::new(&*text, target.type_name(), "not a finite number"))
    }
}

/// Acepta `true`/`false` sin distinguir mayúsculas, además de `1`/`0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanReader;

impl ValueReader for BooleanReader {
    fn read(&self, raw: RawValue<'_>, target: &DataType) -> Result<Value, ConversionError> {
        let text = raw.as_text(target)?;
        match text.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Value::Bool(true)),
            "false" | "0" => Ok(Value::Bool(false)),
            _ => Err(ConversionError::new(&*text, target.type_name(), "expected true or false")),
        }
    }
}
