use crate::app_config::{AppConfig, Environment};
use crate::locale::Locale;
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
/// Every variable has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("VISADIR_ENV", "development"))?;

    let bind_addr = or_default("VISADIR_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("VISADIR_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("VISADIR_LOG_LEVEL", "info");
    let agencies_path = PathBuf::from(or_default(
        "VISADIR_AGENCIES_PATH",
        "./config/agencies.yaml",
    ));
    let default_locale = or_default("VISADIR_DEFAULT_LOCALE", "en")
        .parse::<Locale>()
        .map_err(|e| invalid("VISADIR_DEFAULT_LOCALE", e.to_string()))?;

    let rate_limit_max_requests = parse_usize("VISADIR_RATE_LIMIT_MAX_REQUESTS", "120")?;
    if rate_limit_max_requests == 0 {
        return Err(invalid(
            "VISADIR_RATE_LIMIT_MAX_REQUESTS",
            "must allow at least one request per window".to_string(),
        ));
    }
    let rate_limit_window_secs = parse_u64("VISADIR_RATE_LIMIT_WINDOW_SECS", "60")?;
    if rate_limit_window_secs == 0 {
        return Err(invalid(
            "VISADIR_RATE_LIMIT_WINDOW_SECS",
            "window must be at least one second".to_string(),
        ));
    }

    let search_default_limit = parse_usize("VISADIR_SEARCH_DEFAULT_LIMIT", "50")?;
    if !(1..=crate::search::MAX_LIMIT).contains(&search_default_limit) {
        return Err(invalid(
            "VISADIR_SEARCH_DEFAULT_LIMIT",
            format!("must be between 1 and {}", crate::search::MAX_LIMIT),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        agencies_path,
        default_locale,
        rate_limit_max_requests,
        rate_limit_window_secs,
        search_default_limit,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VISADIR_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
