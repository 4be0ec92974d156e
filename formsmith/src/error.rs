//! Error types for form sessions

use std::path::PathBuf;

use formsmith_fields::FieldsError;
use formsmith_runtime::RuntimeError;
use thiserror::Error;

/// Result type for session operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors surfaced by the session layer.
///
/// Editing and filling in a form never fails; these come from parsing names,
/// loading configuration, or reading and serializing command scripts.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Fields(#[from] FieldsError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML script parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist
    #[error("configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration file extension is not toml, yaml, yml or json
    #[error("unsupported configuration file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration could not be parsed or merged
    #[error("failed to parse configuration: {source}")]
    Parse {
        #[source]
        source: Box<figment::Error>,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Parse {
            source: Box::new(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::from(FieldsError::unknown_archetype("date"));
        assert_eq!(err.to_string(), "unknown field archetype: date");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnsupportedFormat {
            path: PathBuf::from("form.ini"),
        };
        assert!(err.to_string().contains("form.ini"));
    }
}
