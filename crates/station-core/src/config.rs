use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let env = parse_environment(&or_default("STATION_ENV", "development"));

    let raw_bind = or_default("STATION_BIND_ADDR", "0.0.0.0:3000");
    let bind_addr = raw_bind
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "STATION_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let log_level = or_default("STATION_LOG_LEVEL", "info");
    let site_path = PathBuf::from(or_default("STATION_SITE_PATH", "./config/site.yaml"));

    let site_url = or_default("STATION_SITE_URL", "https://station2290.ru");
    if !(site_url.starts_with("https://") || site_url.starts_with("http://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "STATION_SITE_URL".to_string(),
            reason: format!("expected an absolute http(s) URL, got '{site_url}'"),
        });
    }

    let strict_page_kinds = parse_bool(
        "STATION_STRICT_PAGE_KINDS",
        &or_default("STATION_STRICT_PAGE_KINDS", "false"),
    )?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        site_path,
        site_url,
        strict_page_kinds,
        google_verification: optional("GOOGLE_VERIFICATION"),
        yandex_verification: optional("YANDEX_VERIFICATION"),
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
