//! `ParameterDescriptor`: regla de binding de un argumento de handler.
//!
//! El descriptor es un valor inmutable. Cada paso de descubrimiento (scan de
//! anotaciones, scan de la plantilla de path, inferencia de body) produce un
//! candidato parcial; los builders consumen el valor y devuelven uno nuevo o
//! un `BindingError`, y `merge` combina dos candidatos sin mutar ninguno.

mod merge;
mod parts;

pub use merge::merge_descriptors;
pub use parts::DescriptorParts;

use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::data_type::{DataType, ReaderId};
use crate::errors::BindingError;
use crate::source::ParameterSource;

/// Posición y tipo del argumento del handler al que se asocia el parámetro.
///
/// Índice y tipo viajan juntos: un argumento enlazado siempre conoce su tipo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArgumentBinding {
    pub index: usize,
    pub data_type: DataType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    source: ParameterSource,
    name: String,
    argument: Option<ArgumentBinding>,
    path_position: Option<usize>,
    regex_group_index: Option<usize>,
    regular_expression: Option<String>,
    default_value: Option<String>,
    value_reader: Option<ReaderId>,
}

impl ParameterDescriptor {
    /// Crea un descriptor sin enlazar a ningún argumento.
    pub fn new(source: ParameterSource, name: impl AsRef<str>) -> Result<Self, BindingError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(BindingError::invalid("Missing parameter name!"));
        }
        Ok(ParameterDescriptor {
            source,
            name: name.to_string(),
            argument: None,
            path_position: None,
            regex_group_index: None,
            regular_expression: None,
            default_value: None,
            value_reader: None,
        })
    }

    /// Descriptor de body; el nombre es la descripción del origen.
    pub fn body() -> Self {
        let source = ParameterSource::Body;
        ParameterDescriptor {
            source,
            name: source.description().to_string(),
            argument: None,
            path_position: None,
            regex_group_index: None,
            regular_expression: None,
            default_value: None,
            value_reader: None,
        }
    }

    pub fn with_argument(
        source: ParameterSource,
        name: impl AsRef<str>,
        data_type: DataType,
        argument_index: i32,
    ) -> Result<Self, BindingError> {
        Self::new(source, name)?.bind_argument(data_type, argument_index)
    }

    /// Enlaza el descriptor a un argumento del handler.
    pub fn bind_argument(mut self, data_type: DataType, argument_index: i32) -> Result<Self, BindingError> {
        let index = non_negative(argument_index, "Can't set negative argument index!")?;
        self.argument = Some(ArgumentBinding { index, data_type });
        Ok(self)
    }

    /// Asocia una expresión regular y el grupo de captura que aporta el valor.
    ///
    /// Un patrón vacío se trata como ausente; el índice se fija igualmente.
    pub fn with_regex(mut self, pattern: Option<&str>, group_index: i32) -> Result<Self, BindingError> {
        let pattern = trim_to_none(pattern);
        if let Some(p) = pattern.as_deref() {
            check_pattern(p)?;
        }
        let group = non_negative(group_index, "Can't set negative regular expression index!")?;
        self.regular_expression = pattern;
        self.regex_group_index = Some(group);
        Ok(self)
    }

    pub fn with_path_position(mut self, position: i32) -> Result<Self, BindingError> {
        self.path_position = Some(non_negative(position, "Can't set negative path position!")?);
        Ok(self)
    }

    pub fn with_default_value(mut self, value: Option<&str>) -> Self {
        self.default_value = trim_to_none(value);
        self
    }

    pub fn with_value_reader(mut self, reader: ReaderId) -> Self {
        self.value_reader = Some(reader);
        self
    }

    /// Combina `self` (autoritativo) con `other` (valores de respaldo).
    pub fn merge(&self, other: &ParameterDescriptor) -> ParameterDescriptor {
        merge_descriptors(self, other)
    }

    pub fn source(&self) -> ParameterSource {
        self.source
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument(&self) -> Option<&ArgumentBinding> {
        self.argument.as_ref()
    }

    pub fn argument_index(&self) -> Option<usize> {
        self.argument.as_ref().map(|a| a.index)
    }

    pub fn data_type(&self) -> Option<&DataType> {
        self.argument.as_ref().map(|a| &a.data_type)
    }

    pub fn path_position(&self) -> Option<usize> {
        self.path_position
    }

    pub fn regex_group_index(&self) -> Option<usize> {
        self.regex_group_index
    }

    pub fn regular_expression(&self) -> Option<&str> {
        self.regular_expression.as_deref()
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn value_reader(&self) -> Option<&ReaderId> {
        self.value_reader.as_ref()
    }

    pub fn is_regex(&self) -> bool {
        self.regular_expression.is_some()
    }

    pub fn is_body(&self) -> bool {
        self.source.is_body()
    }

    pub fn is_used_as_argument(&self) -> bool {
        self.argument.is_some()
    }
}

impl fmt::Display for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source.is_body() {
            return f.write_str(self.source.description());
        }
        write!(f, "{}(\"{}\")", self.source.description(), self.name)
    }
}

fn non_negative(value: i32, msg: &str) -> Result<usize, BindingError> {
    usize::try_from(value).map_err(|_| BindingError::invalid(msg))
}

fn trim_to_none(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

fn check_pattern(pattern: &str) -> Result<(), BindingError> {
    Regex::new(pattern).map(|_| ()).map_err(|e| BindingError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
