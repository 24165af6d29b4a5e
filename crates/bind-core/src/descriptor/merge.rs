//! Merge ("join") de dos descriptores del mismo argumento lógico.
//!
//! Semántica sesgada a la izquierda: cada campo de `a` se conserva si está
//! presente y sólo se completa con `b` cuando falta. La única excepción es el
//! par origen/nombre: un `a` que es body (suposición por defecto) cede ante
//! un origen explícito de `b`.

use super::ParameterDescriptor;

pub fn merge_descriptors(a: &ParameterDescriptor, b: &ParameterDescriptor) -> ParameterDescriptor {
    let (source, name) = if a.source.is_body() && !b.source.is_body() {
        (b.source, b.name.clone())
    } else {
        (a.source, a.name.clone())
    };

    ParameterDescriptor {
        source,
        name,
        argument: a.argument.clone().or_else(|| b.argument.clone()),
        path_position: a.path_position.or(b.path_position),
        regex_group_index: a.regex_group_index.or(b.regex_group_index),
        regular_expression: a.regular_expression.clone().or_else(|| b.regular_expression.clone()),
        default_value: a.default_value.clone().or_else(|| b.default_value.clone()),
        value_reader: a.value_reader.clone().or_else(|| b.value_reader.clone()),
    }
}
