//! Errores del modelo de binding.
//!
//! Todos se producen de forma síncrona durante el registro de rutas y abortan
//! el registro del handler afectado; no hay reintentos.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum BindingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid regular expression: '{pattern}' ({reason})")]
    InvalidPattern { pattern: String, reason: String },
    #[error("handler '{handler}': no parameter bound to argument {index}")]
    MissingArgument { handler: String, index: usize },
    #[error("handler '{handler}': argument index {index} out of range (arity {arity})")]
    ArgumentOutOfRange { handler: String, index: usize, arity: usize },
}

impl BindingError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        BindingError::InvalidArgument(msg.into())
    }
}
