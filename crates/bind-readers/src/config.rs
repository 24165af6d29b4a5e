//! Carga de configuración de lectores desde variables de entorno.
//! Usa los prefijos `RESTBIND_` y admite un archivo `.env` opcional.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Recorta espacios de los tokens de path/query antes de convertir.
    pub trim_tokens: bool,
    /// Si es `false`, un lector sobrescrito desconocido cae al lector por
    /// defecto del tipo en vez de fallar.
    pub strict_overrides: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { trim_tokens: true, strict_overrides: true }
    }
}

impl ReaderConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let defaults = Self::default();
        let trim_tokens = env_flag("RESTBIND_TRIM_TOKENS").unwrap_or(defaults.trim_tokens);
        let strict_overrides = env_flag("RESTBIND_STRICT_OVERRIDES").unwrap_or(defaults.strict_overrides);
        Self { trim_tokens, strict_overrides }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
