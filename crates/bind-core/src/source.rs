use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::BindingError;

/// Origen del valor de un parámetro dentro de la petición HTTP.
///
/// Conjunto cerrado: sólo se admiten los orígenes que el escáner de
/// anotaciones produce hoy (path, query, body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ParameterSource {
    /// Segmento del path (`{name}` o grupo de captura de una regex).
    Path,
    /// Parámetro de la query string.
    Query,
    /// Cuerpo completo de la petición.
    Body,
}

impl ParameterSource {
    /// Descripción legible usada en diagnósticos y logs.
    pub fn description(&self) -> &'static str {
        match self {
            ParameterSource::Path => "Path Param",
            ParameterSource::Query => "Query Param",
            ParameterSource::Body => "Request Body",
        }
    }

    pub fn is_body(&self) -> bool {
        matches!(self, ParameterSource::Body)
    }
}

impl fmt::Display for ParameterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for ParameterSource {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "path" => Ok(ParameterSource::Path),
            "query" => Ok(ParameterSource::Query),
            "body" => Ok(ParameterSource::Body),
            other => Err(BindingError::invalid(format!("Unknown parameter source: '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_are_stable() {
        assert_eq!(ParameterSource::Path.to_string(), "Path Param");
        assert_eq!(ParameterSource::Query.to_string(), "Query Param");
        assert_eq!(ParameterSource::Body.to_string(), "Request Body");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("QUERY".parse::<ParameterSource>().unwrap(), ParameterSource::Query);
        assert_eq!(" body ".parse::<ParameterSource>().unwrap(), ParameterSource::Body);
        assert!("header".parse::<ParameterSource>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let s = serde_json::to_string(&ParameterSource::Path).unwrap();
        assert_eq!(s, "\"path\"");
    }
}
