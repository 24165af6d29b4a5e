use bind_core::BindingError;
use bind_readers::ReaderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error de definición de ruta: {0}")]
    Binding(#[from] BindingError),
    #[error("Error de lector: {0}")]
    Reader(#[from] ReaderError),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}
