use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("GEMINI_API_KEY", "test-key");
    m
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GEMINI_API_KEY"),
        "expected MissingEnvVar(GEMINI_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("GEMINI_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("CHORUS_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CHORUS_BIND_ADDR"),
        "expected InvalidEnvVar(CHORUS_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.max_body_bytes, 10 * 1024 * 1024);
    assert_eq!(cfg.model.api_key, "test-key");
    assert_eq!(cfg.model.base_url, DEFAULT_MODEL_BASE_URL);
    assert_eq!(cfg.model.chunk_model, DEFAULT_CHUNK_MODEL);
    assert_eq!(cfg.model.synthesis_model, DEFAULT_SYNTHESIS_MODEL);
    assert!(cfg.model.timeout_secs.is_none());
}

#[test]
fn model_overrides_are_applied() {
    let mut map = full_env();
    map.insert("CHORUS_MODEL_BASE_URL", "http://127.0.0.1:9999");
    map.insert("CHORUS_CHUNK_MODEL", "fast-model");
    map.insert("CHORUS_SYNTHESIS_MODEL", "deep-model");
    map.insert("CHORUS_MODEL_TIMEOUT_SECS", "45");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.model.base_url, "http://127.0.0.1:9999");
    assert_eq!(cfg.model.chunk_model, "fast-model");
    assert_eq!(cfg.model.synthesis_model, "deep-model");
    assert_eq!(cfg.model.timeout_secs, Some(45));
}

#[test]
fn model_timeout_invalid() {
    let mut map = full_env();
    map.insert("CHORUS_MODEL_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CHORUS_MODEL_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CHORUS_MODEL_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn max_body_bytes_invalid() {
    let mut map = full_env();
    map.insert("CHORUS_MAX_BODY_BYTES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CHORUS_MAX_BODY_BYTES")
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-key"), "api key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn deployment_environment_is_not_read() {
    let mut map = full_env();
    map.insert("CHORUS_ENV", "staging");
    let cfg = build_app_config(lookup_from_map(&map)).expect("CHORUS_ENV has no effect");
    assert!(!format!("{cfg:?}").contains("staging"));
}
