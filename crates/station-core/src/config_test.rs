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

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults are valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.site_path.to_string_lossy(), "./config/site.yaml");
    assert_eq!(cfg.site_url, "https://station2290.ru");
    assert!(!cfg.strict_page_kinds);
    assert!(cfg.google_verification.is_none());
    assert!(cfg.yandex_verification.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("STATION_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STATION_BIND_ADDR"),
        "expected InvalidEnvVar(STATION_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_relative_site_url() {
    let mut map = HashMap::new();
    map.insert("STATION_SITE_URL", "station2290.ru");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STATION_SITE_URL"),
        "expected InvalidEnvVar(STATION_SITE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_strict_page_kinds() {
    let mut map = HashMap::new();
    map.insert("STATION_STRICT_PAGE_KINDS", "TRUE");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.strict_page_kinds);
}

#[test]
fn build_app_config_rejects_garbage_strict_flag() {
    let mut map = HashMap::new();
    map.insert("STATION_STRICT_PAGE_KINDS", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STATION_STRICT_PAGE_KINDS"),
        "expected InvalidEnvVar(STATION_STRICT_PAGE_KINDS), got: {result:?}"
    );
}

#[test]
fn blank_verification_tokens_are_treated_as_unset() {
    let mut map = HashMap::new();
    map.insert("GOOGLE_VERIFICATION", "  ");
    map.insert("YANDEX_VERIFICATION", "yandex-token");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.google_verification.is_none());
    assert_eq!(cfg.yandex_verification.as_deref(), Some("yandex-token"));
}

#[test]
fn site_base_strips_trailing_slash() {
    let mut map = HashMap::new();
    map.insert("STATION_SITE_URL", "https://example.com/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.site_base(), "https://example.com");
}

#[test]
fn debug_redacts_verification_tokens() {
    let mut map = HashMap::new();
    map.insert("GOOGLE_VERIFICATION", "secret-google-token");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-google-token"));
    assert!(rendered.contains("[redacted]"));
}
