//! Session configuration loaded with Figment
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. An optional configuration file (TOML, YAML or JSON by extension)
//! 3. Environment variables with the `FORMSMITH_` prefix, nested keys split on `__`

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use formsmith_fields::FieldDefaults;
use formsmith_runtime::PayloadKey;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConfigError;

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "FORMSMITH_";

/// Settings for one form session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// How accepted payloads are keyed
    pub payload_key: PayloadKey,
    /// Labels and options given to newly added fields
    pub fields: FieldDefaults,
}

impl FormConfig {
    pub fn with_payload_key(mut self, key: PayloadKey) -> Self {
        self.payload_key = key;
        self
    }

    pub fn with_fields(mut self, fields: FieldDefaults) -> Self {
        self.fields = fields;
        self
    }
}

/// Builds a [`FormConfig`] from defaults, an optional file and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            file: None,
            env_prefix: Some(ENV_PREFIX.to_string()),
        }
    }

    /// Merge a configuration file over the defaults. The file must exist.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Read environment variables with a different prefix.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Ignore the environment entirely.
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    pub fn load(&self) -> Result<FormConfig, ConfigError> {
        let config: FormConfig = self.build_figment()?.extract()?;
        debug!(
            payload_key = %config.payload_key,
            file = ?self.file,
            "configuration loaded"
        );
        Ok(config)
    }

    fn build_figment(&self) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(FormConfig::default()));

        if let Some(path) = &self.file {
            figment = figment.merge(file_provider(path)?);
        }

        if let Some(prefix) = &self.env_prefix {
            trace!(%prefix, "merging environment variables");
            figment = figment.merge(Env::prefixed(prefix).split("__"));
        }

        Ok(figment)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn file_provider(path: &Path) -> Result<Figment, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("toml") => Ok(Figment::from(Toml::file(path))),
        Some("yaml" | "yml") => Ok(Figment::from(Yaml::file(path))),
        Some("json") => Ok(Figment::from(Json::file(path))),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_fields::Archetype;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_sources() {
        let config = ConfigLoader::new().without_env().load().unwrap();
        assert_eq!(config, FormConfig::default());
        assert_eq!(config.payload_key, PayloadKey::Id);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("formsmith.toml");
        fs::write(
            &path,
            r#"
payload_key = "label"

[fields]
options = ["Yes", "No"]

[fields.labels]
text = "Your answer"
"#,
        )
        .unwrap();

        let config = ConfigLoader::new().with_file(&path).without_env().load().unwrap();
        assert_eq!(config.payload_key, PayloadKey::Label);
        assert_eq!(config.fields.options, vec!["Yes", "No"]);
        assert_eq!(config.fields.label_for(Archetype::Text), "Your answer");
        assert_eq!(config.fields.label_for(Archetype::Checkbox), "Checkbox");
    }

    #[test]
    fn yaml_file_is_supported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("formsmith.yaml");
        fs::write(&path, "fields:\n  new_option: Another choice\n").unwrap();

        let config = ConfigLoader::new().with_file(&path).without_env().load().unwrap();
        assert_eq!(config.fields.new_option, "Another choice");
    }

    #[test]
    fn payload_key_is_case_insensitive_in_files() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("formsmith.yaml");
        fs::write(&path, "payload_key: Label
").unwrap();

        let config = ConfigLoader::new().with_file(&path).without_env().load().unwrap();
        assert_eq!(config.payload_key, PayloadKey::Label);
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = ConfigLoader::new()
            .with_file(tmp.path().join("absent.toml"))
            .without_env()
            .load();
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("formsmith.ini");
        fs::write(&path, "payload_key=label").unwrap();
        let result = ConfigLoader::new().with_file(&path).without_env().load();
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    fn bad_payload_key_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("formsmith.json");
        fs::write(&path, r#"{"payload_key": "name"}"#).unwrap();
        let result = ConfigLoader::new().with_file(&path).without_env().load();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    #[serial]
    fn environment_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("formsmith.toml");
        fs::write(&path, "payload_key = \"id\"\n").unwrap();

        std::env::set_var("FSTEST_PAYLOAD_KEY", "label");
        std::env::set_var("FSTEST_FIELDS__NEW_OPTION", "From env");
        let config = ConfigLoader::new()
            .with_file(&path)
            .with_env_prefix("FSTEST_")
            .load();
        std::env::remove_var("FSTEST_PAYLOAD_KEY");
        std::env::remove_var("FSTEST_FIELDS__NEW_OPTION");

        let config = config.unwrap();
        assert_eq!(config.payload_key, PayloadKey::Label);
        assert_eq!(config.fields.new_option, "From env");
    }
}
