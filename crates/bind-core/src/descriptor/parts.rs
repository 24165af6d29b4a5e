//! Construcción a partir de estado parcial.
//!
//! El escáner entrega los hechos que conoce de un parámetro en bloque; los
//! índices llegan tal cual (con signo) y se validan aquí.

use super::ParameterDescriptor;
use crate::data_type::{DataType, ReaderId};
use crate::errors::BindingError;
use crate::source::ParameterSource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorParts {
    pub argument_index: Option<i32>,
    pub data_type: Option<DataType>,
    pub path_position: Option<i32>,
    pub regex_group_index: Option<i32>,
    pub regular_expression: Option<String>,
    pub default_value: Option<String>,
    pub value_reader: Option<ReaderId>,
}

impl ParameterDescriptor {
    /// Valida `parts` completo y devuelve el descriptor o el primer error.
    pub fn from_parts(
        source: Option<ParameterSource>,
        name: Option<&str>,
        parts: DescriptorParts,
    ) -> Result<Self, BindingError> {
        let source = source.ok_or_else(|| BindingError::invalid("Missing parameter type!"))?;
        let mut descriptor = ParameterDescriptor::new(source, name.unwrap_or_default())?;

        descriptor = match (parts.data_type, parts.argument_index) {
            (Some(data_type), Some(index)) => descriptor.bind_argument(data_type, index)?,
            (None, Some(_)) => return Err(BindingError::invalid("Missing argument type!")),
            (Some(_), None) => return Err(BindingError::invalid("Missing argument index!")),
            (None, None) => descriptor,
        };

        descriptor = match (parts.regular_expression, parts.regex_group_index) {
            (pattern, Some(group)) => descriptor.with_regex(pattern.as_deref(), group)?,
            (Some(_), None) => return Err(BindingError::invalid("Missing regular expression index!")),
            (None, None) => descriptor,
        };

        if let Some(position) = parts.path_position {
            descriptor = descriptor.with_path_position(position)?;
        }
        if let Some(reader) = parts.value_reader {
            descriptor = descriptor.with_value_reader(reader);
        }
        Ok(descriptor.with_default_value(parts.default_value.as_deref()))
    }
}
