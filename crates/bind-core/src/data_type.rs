//! Referencias de tipo e identificadores de lectores.
//!
//! `DataType` sustituye a la referencia de clase: describe el tipo que el
//! argumento del handler declara. `ReaderId` identifica de forma estable al
//! lector que convierte el valor crudo a ese tipo.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::errors::BindingError;

/// Tipo declarado por un argumento de handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum DataType {
    Text,
    Integer,
    Float,
    Boolean,
    Json,
    /// Tipo propio del handler; necesita un lector explícito.
    Named(String),
}

impl DataType {
    /// Nombre usado en mensajes de error de conversión.
    pub fn type_name(&self) -> &str {
        match self {
            DataType::Text => "text",
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Boolean => "boolean",
            DataType::Json => "json",
            DataType::Named(name) => name,
        }
    }

    /// Interpreta el nombre corto de un tipo; cualquier otro nombre se toma
    /// como tipo propio.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "text" | "string" | "String" => DataType::Text,
            "integer" | "int" | "i64" => DataType::Integer,
            "float" | "double" | "f64" => DataType::Float,
            "boolean" | "bool" => DataType::Boolean,
            "json" => DataType::Json,
            other => DataType::Named(other.to_string()),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Identificador estable de un `ValueReader` registrado.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReaderId(String);

impl ReaderId {
    pub fn new(id: impl AsRef<str>) -> Result<Self, BindingError> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err(BindingError::invalid("Missing value reader id!"));
        }
        Ok(ReaderId(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ReaderId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
