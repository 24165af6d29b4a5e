use serde::Serialize;
use std::sync::Arc;

use crate::descriptor::ParameterDescriptor;

/// Descriptores finales de un handler, indexados por argumento.
///
/// Inmutable tras `HandlerParameters::resolve`; clonarlo sólo copia el `Arc`,
/// de modo que el loop de dispatch lo comparte entre peticiones sin locks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedParameters {
    handler: String,
    parameters: Arc<[ParameterDescriptor]>,
}

impl ResolvedParameters {
    pub(crate) fn new(handler: String, parameters: Vec<ParameterDescriptor>) -> Self {
        Self { handler, parameters: parameters.into() }
    }

    pub fn handler(&self) -> &str {
        &self.handler
    }

    pub fn get(&self, argument_index: usize) -> Option<&ParameterDescriptor> {
        self.parameters.get(argument_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
