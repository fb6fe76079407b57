//! Configuration errors.

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or reading a configuration dictionary.
///
/// Absent optional entries are not errors; lookups that may legitimately miss
/// return `Option` instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required key '{key}'")]
    MissingKey { key: String },

    #[error("Entry '{key}' is not a dictionary")]
    NotADictionary { key: String },

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Dictionary keys must be strings (found {found})")]
    NonStringKey { found: String },
}
