//! Registro de handlers: une el plegado de candidatos (`bind-core`) con la
//! validación de lectores (`bind-readers`).
//!
//! Flujo:
//! 1. El escáner produce candidatos (`parse_candidate` los lee en formato
//!    texto `source:name[:type:index]`).
//! 2. `register_handler` los resuelve y comprueba que cada argumento tenga
//!    lector. Cualquier error aborta el registro del handler.
//! 3. En tiempo de petición `bind_arguments` convierte los valores crudos.

use bind_core::{DataType, HandlerParameters, ParameterDescriptor, ParameterSource, ResolvedParameters};
use bind_readers::{RawValue, ReaderRegistry};
use log::info;
use serde_json::Value;

use crate::errors::CoreError;

/// Lee un candidato en formato `source:name[:type:index]`.
///
/// `body` sin nombre (`body::json:2`) usa la descripción del origen.
pub fn parse_candidate(spec: &str) -> Result<ParameterDescriptor, CoreError> {
    let fields: Vec<&str> = spec.split(':').collect();
    let (source, name, binding) = match fields.as_slice() {
        [source, name] => (*source, *name, None),
        [source, name, data_type, index] => (*source, *name, Some((*data_type, *index))),
        _ => return Err(CoreError::Config(format!("expected source:name[:type:index], got '{spec}'"))),
    };

    let source: ParameterSource = source.parse()?;
    let descriptor = if source.is_body() && name.trim().is_empty() {
        ParameterDescriptor::body()
    } else {
        ParameterDescriptor::new(source, name)?
    };

    match binding {
        Some((data_type, index)) => {
            let index: i32 = index
                .trim()
                .parse()
                .map_err(|_| CoreError::Config(format!("invalid argument index '{index}' in '{spec}'")))?;
            Ok(descriptor.bind_argument(DataType::parse(data_type), index)?)
        }
        None => Ok(descriptor),
    }
}

/// Resuelve y valida los parámetros de un handler.
pub fn register_handler(
    parameters: &HandlerParameters,
    arity: usize,
    registry: &ReaderRegistry,
) -> Result<ResolvedParameters, CoreError> {
    let resolved = parameters.resolve(arity)?;
    registry.validate(&resolved)?;
    info!("registered {} with {} parameter(s)", resolved.handler(), resolved.len());
    Ok(resolved)
}

/// Convierte los argumentos de una invocación.
///
/// `lookup` extrae de la petición el valor crudo de cada descriptor (por
/// nombre, posición de path o grupo de regex, según el origen).
pub fn bind_arguments<'r, F>(
    resolved: &ResolvedParameters,
    registry: &ReaderRegistry,
    mut lookup: F,
) -> Result<Vec<Value>, CoreError>
where
    F: FnMut(&ParameterDescriptor) -> Option<RawValue<'r>>,
{
    resolved
        .iter()
        .map(|descriptor| registry.read(descriptor, lookup(descriptor)).map_err(CoreError::from))
        .collect()
}
