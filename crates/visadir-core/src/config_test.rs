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
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "VISADIR_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.agencies_path,
        std::path::PathBuf::from("./config/agencies.yaml")
    );
    assert_eq!(cfg.default_locale, Locale::En);
    assert_eq!(cfg.rate_limit_max_requests, 120);
    assert_eq!(cfg.rate_limit_window_secs, 60);
    assert_eq!(cfg.search_default_limit, 50);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("VISADIR_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VISADIR_BIND_ADDR"),
        "expected InvalidEnvVar(VISADIR_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_invalid_visadir_env() {
    let mut map = HashMap::new();
    map.insert("VISADIR_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VISADIR_ENV"),
        "expected InvalidEnvVar(VISADIR_ENV), got: {result:?}"
    );
}

#[test]
fn default_locale_override() {
    let mut map = HashMap::new();
    map.insert("VISADIR_DEFAULT_LOCALE", "th");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_locale, Locale::Th);
}

#[test]
fn default_locale_unsupported_fails() {
    let mut map = HashMap::new();
    map.insert("VISADIR_DEFAULT_LOCALE", "fr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VISADIR_DEFAULT_LOCALE"),
        "expected InvalidEnvVar(VISADIR_DEFAULT_LOCALE), got: {result:?}"
    );
}

#[test]
fn agencies_path_override() {
    let mut map = HashMap::new();
    map.insert("VISADIR_AGENCIES_PATH", "/srv/visadir/agencies.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.agencies_path,
        std::path::PathBuf::from("/srv/visadir/agencies.yaml")
    );
}

#[test]
fn rate_limit_max_requests_override() {
    let mut map = HashMap::new();
    map.insert("VISADIR_RATE_LIMIT_MAX_REQUESTS", "10");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.rate_limit_max_requests, 10);
}

#[test]
fn rate_limit_max_requests_invalid() {
    let mut map = HashMap::new();
    map.insert("VISADIR_RATE_LIMIT_MAX_REQUESTS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VISADIR_RATE_LIMIT_MAX_REQUESTS"),
        "expected InvalidEnvVar(VISADIR_RATE_LIMIT_MAX_REQUESTS), got: {result:?}"
    );
}

#[test]
fn rate_limit_window_zero_fails() {
    let mut map = HashMap::new();
    map.insert("VISADIR_RATE_LIMIT_WINDOW_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VISADIR_RATE_LIMIT_WINDOW_SECS"),
        "expected InvalidEnvVar(VISADIR_RATE_LIMIT_WINDOW_SECS), got: {result:?}"
    );
}

#[test]
fn rate_limit_max_requests_zero_fails() {
    let mut map = HashMap::new();
    map.insert("VISADIR_RATE_LIMIT_MAX_REQUESTS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VISADIR_RATE_LIMIT_MAX_REQUESTS"),
        "expected InvalidEnvVar(VISADIR_RATE_LIMIT_MAX_REQUESTS), got: {result:?}"
    );
}

#[test]
fn search_default_limit_override() {
    let mut map = HashMap::new();
    map.insert("VISADIR_SEARCH_DEFAULT_LIMIT", "20");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search_default_limit, 20);
}

#[test]
fn search_default_limit_out_of_range_fails() {
    let mut map = HashMap::new();
    map.insert("VISADIR_SEARCH_DEFAULT_LIMIT", "500");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VISADIR_SEARCH_DEFAULT_LIMIT"),
        "expected InvalidEnvVar(VISADIR_SEARCH_DEFAULT_LIMIT), got: {result:?}"
    );
}
