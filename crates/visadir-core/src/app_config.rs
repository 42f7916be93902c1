use std::net::SocketAddr;
use std::path::PathBuf;

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// YAML fixture backing the agency record store.
    pub agencies_path: PathBuf,
    /// Locale used when a request path carries no supported locale prefix.
    pub default_locale: Locale,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
    pub search_default_limit: usize,
}
