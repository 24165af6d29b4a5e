//! `ReaderRegistry`: resolución de lectores por `ReaderId`.
//!
//! Se construye durante el registro de rutas y después sólo se lee; los
//! lectores se guardan como `Arc<dyn ValueReader>` para compartirlos entre
//! peticiones concurrentes.

use bind_core::{DataType, ParameterDescriptor, ReaderId, ResolvedParameters};
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ReaderConfig;
use crate::errors::ReaderError;
use crate::reader::{RawValue, ValueReader};
use crate::readers::{self, BooleanReader, FloatReader, IntegerReader, JsonReader, TextReader};

/// Registro global con los lectores incluidos y la configuración del entorno.
pub static DEFAULT_READERS: Lazy<ReaderRegistry> = Lazy::new(|| ReaderRegistry::with_defaults(ReaderConfig::from_env()));

#[derive(Debug, Clone)]
pub struct ReaderRegistry {
    config: ReaderConfig,
    readers: HashMap<ReaderId, Arc<dyn ValueReader>>,
}

impl ReaderRegistry {
    /// Registro vacío.
    pub fn new(config: ReaderConfig) -> Self {
        Self { config, readers: HashMap::new() }
    }

    /// Registro con los lectores de los tipos básicos.
    pub fn with_defaults(config: ReaderConfig) -> Self {
        let builtins: [(&str, Arc<dyn ValueReader>); 5] = [
            (readers::TEXT, Arc::new(TextReader)),
            (readers::INTEGER, Arc::new(IntegerReader)),
            (readers::FLOAT, Arc::new(FloatReader)),
            (readers::BOOLEAN, Arc::new(BooleanReader)),
            (readers::JSON, Arc::new(JsonReader)),
        ];
        let mut registry = Self::new(config);
        for (id, reader) in builtins {
            match ReaderId::new(id) {
                Ok(id) => {
                    registry.readers.insert(id, reader);
                }
                Err(e) => {
                    debug_assert!(false, "built-in reader id '{id}' rejected: {e}");
                    warn!("skipping built-in reader '{id}': {e}");
                }
            }
        }
        registry
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn register(&mut self, id: ReaderId, reader: Arc<dyn ValueReader>) -> Result<&mut Self, ReaderError> {
        if self.readers.contains_key(&id) {
            return Err(ReaderError::DuplicateReader(id));
        }
        debug!("registering value reader {id}");
        self.readers.insert(id, reader);
        Ok(self)
    }

    pub fn get(&self, id: &ReaderId) -> Option<&Arc<dyn ValueReader>> {
        self.readers.get(id)
    }

    /// Lector a usar para `descriptor`: el sobrescrito si existe, si no el
    /// lector por defecto de su tipo.
    pub fn reader_for(&self, descriptor: &ParameterDescriptor) -> Result<&Arc<dyn ValueReader>, ReaderError> {
        let data_type = descriptor
            .data_type()
            .ok_or_else(|| ReaderError::Unbound(descriptor.to_string()))?;

        if let Some(id) = descriptor.value_reader() {
            match self.readers.get(id) {
                Some(reader) => return Ok(reader),
                None if self.config.strict_overrides => return Err(ReaderError::UnknownReader(id.clone())),
                None => warn!("{descriptor}: unknown value reader {id}, using default for {data_type}"),
            }
        }
        self.default_for(data_type)
    }

    fn default_for(&self, data_type: &DataType) -> Result<&Arc<dyn ValueReader>, ReaderError> {
        readers::default_reader_id(data_type)
            .and_then(|id| self.readers.get(id))
            .ok_or_else(|| ReaderError::NoDefaultReader(data_type.type_name().to_string()))
    }

    /// Comprueba en el registro de la ruta que cada argumento tiene lector.
    pub fn validate(&self, parameters: &ResolvedParameters) -> Result<(), ReaderError> {
        for descriptor in parameters.iter() {
            self.reader_for(descriptor)?;
        }
        Ok(())
    }

    /// Convierte el valor de un argumento en tiempo de petición.
    ///
    /// Sin valor crudo se usa el valor por defecto del descriptor; sin ninguno
    /// de los dos el resultado es `Value::Null`.
    pub fn read(&self, descriptor: &ParameterDescriptor, raw: Option<RawValue<'_>>) -> Result<Value, ReaderError> {
        let reader = self.reader_for(descriptor)?;
        let raw = match raw.or_else(|| descriptor.default_value().map(RawValue::Token)) {
            Some(RawValue::Token(token)) if self.config.trim_tokens => RawValue::Token(token.trim()),
            Some(raw) => raw,
            None => return Ok(Value::Null),
        };
        let data_type = descriptor
            .data_type()
            .ok_or_else(|| ReaderError::Unbound(descriptor.to_string()))?;
        Ok(reader.read(raw, data_type)?)
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_defaults(ReaderConfig::default())
    }
}
