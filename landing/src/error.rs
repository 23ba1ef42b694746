//! Error types for the few fallible edges of the page.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid site config: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),

    #[error("global subscriber already installed")]
    AlreadyInstalled,
}
