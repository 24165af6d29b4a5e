//! Plegado de candidatos por handler.
//!
//! Cada pasada de descubrimiento añade candidatos con `add`; `resolve` los
//! reduce a exactamente un descriptor por argumento antes de registrar la
//! ruta. El orden de `add` importa: el primer candidato de cada argumento es
//! el receptor del merge.

mod resolved;

pub use resolved::ResolvedParameters;

use log::{debug, warn};
use std::collections::BTreeMap;

use crate::descriptor::ParameterDescriptor;
use crate::errors::BindingError;

#[derive(Debug, Clone)]
pub struct HandlerParameters {
    handler: String,
    candidates: Vec<ParameterDescriptor>,
}

impl HandlerParameters {
    pub fn new(handler: impl Into<String>) -> Self {
        Self { handler: handler.into(), candidates: vec![] }
    }

    pub fn handler(&self) -> &str {
        &self.handler
    }

    pub fn add(&mut self, candidate: ParameterDescriptor) -> &mut Self {
        self.candidates.push(candidate);
        self
    }

    pub fn candidates(&self) -> &[ParameterDescriptor] {
        &self.candidates
    }

    /// Reduce los candidatos a un descriptor por argumento `0..arity`.
    pub fn resolve(&self, arity: usize) -> Result<ResolvedParameters, BindingError> {
        let mut bound: BTreeMap<usize, ParameterDescriptor> = BTreeMap::new();
        let mut unbound: Vec<&ParameterDescriptor> = vec![];

        for candidate in &self.candidates {
            let Some(index) = candidate.argument_index() else {
                unbound.push(candidate);
                continue;
            };
            if index >= arity {
                return Err(BindingError::ArgumentOutOfRange { handler: self.handler.clone(), index, arity });
            }
            let merged = match bound.remove(&index) {
                Some(receiver) => receiver.merge(candidate),
                None => candidate.clone(),
            };
            bound.insert(index, merged);
        }

        // Los candidatos sin argumento vienen de la plantilla de path y se
        // asocian por origen y nombre.
        for template_param in unbound {
            let target = bound.values_mut().find(|d| {
                !d.is_body() && d.source() == template_param.source() && d.name() == template_param.name()
            });
            match target {
                Some(descriptor) => {
                    debug!("{}: joining {} from path template", self.handler, template_param);
                    *descriptor = descriptor.merge(template_param);
                }
                None => warn!("{}: {} is not used by any handler argument", self.handler, template_param),
            }
        }

        let mut parameters = Vec::with_capacity(arity);
        for index in 0..arity {
            let descriptor = bound
                .remove(&index)
                .ok_or_else(|| BindingError::MissingArgument { handler: self.handler.clone(), index })?;
            debug!("{}: argument {} bound to {}", self.handler, index, descriptor);
            parameters.push(descriptor);
        }
        Ok(ResolvedParameters::new(self.handler.clone(), parameters))
    }
}
