use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read agencies file {path}: {source}")]
    AgenciesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse agencies file: {0}")]
    AgenciesFileParse(#[from] serde_yaml::Error),

    #[error("agencies validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unsupported locale: {0}")]
    UnknownLocale(String),

    #[error("unknown sort option: {0}")]
    UnknownSortOption(String),

    #[error("message bundle for {locale} is invalid: {reason}")]
    InvalidBundle { locale: String, reason: String },
}
