use crate::app_config::{AppConfig, ModelConfig};
use crate::ConfigError;

pub const DEFAULT_MODEL_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_CHUNK_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_SYNTHESIS_MODEL: &str = "gemini-2.5-pro";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            _ => Ok(None),
        }
    };

    let api_key = require("GEMINI_API_KEY")?;

    let bind_addr = parse_addr("CHORUS_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("CHORUS_LOG_LEVEL", "info");
    let max_body_bytes = parse_usize("CHORUS_MAX_BODY_BYTES", "10485760")?;

    let model = ModelConfig {
        api_key,
        base_url: or_default("CHORUS_MODEL_BASE_URL", DEFAULT_MODEL_BASE_URL),
        chunk_model: or_default("CHORUS_CHUNK_MODEL", DEFAULT_CHUNK_MODEL),
        synthesis_model: or_default("CHORUS_SYNTHESIS_MODEL", DEFAULT_SYNTHESIS_MODEL),
        timeout_secs: parse_optional_u64("CHORUS_MODEL_TIMEOUT_SECS")?,
    };

    Ok(AppConfig {
        bind_addr,
        log_level,
        max_body_bytes,
        model,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
