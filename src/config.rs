use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RelayError, RelayResult};

/// Project configuration for the hosted messaging service.
///
/// All fields are opaque identifiers handed to the service as-is; their
/// internal structure is never interpreted. The record is loaded once at
/// startup and never mutated or reloaded. It must match the identifiers
/// used by push producers, otherwise delivery fails silently upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    pub project_id: String,
    #[serde(default)]
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    #[serde(default)]
    pub measurement_id: String,
}

impl ProjectConfig {
    /// Load the configuration from the default location
    pub fn load() -> RelayResult<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load and validate the configuration from a specific TOML file
    pub fn load_from(path: &Path) -> RelayResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ProjectConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration file path
    pub fn default_path() -> RelayResult<PathBuf> {
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else {
            dirs::config_dir().ok_or_else(|| {
                RelayError::InvalidConfig("could not determine config directory".to_string())
            })?
        };

        Ok(config_dir.join("pushrelay").join("project.toml"))
    }

    /// Reject records missing the identifiers the hosted service needs to
    /// route pushes at all. The remaining fields may legitimately be empty.
    pub fn validate(&self) -> RelayResult<()> {
        let required = [
            ("api_key", &self.api_key),
            ("project_id", &self.project_id),
            ("messaging_sender_id", &self.messaging_sender_id),
            ("app_id", &self.app_id),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(RelayError::InvalidConfig(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_config() -> ProjectConfig {
        ProjectConfig {
            api_key: "AIza-test-key".to_string(),
            auth_domain: "demo.example.com".to_string(),
            project_id: "demo-project".to_string(),
            storage_bucket: "demo-project.appspot.com".to_string(),
            messaging_sender_id: "746508962866".to_string(),
            app_id: "1:746508962866:web:f900d17a".to_string(),
            measurement_id: "G-TEST".to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_empty_required_field_is_rejected() {
        let mut config = sample_config();
        config.api_key = String::new();
        assert!(matches!(
            config.validate(),
            Err(RelayError::InvalidConfig(_))
        ));

        let mut config = sample_config();
        config.messaging_sender_id = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let mut config = sample_config();
        config.auth_domain = String::new();
        config.measurement_id = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = toml::to_string_pretty(&sample_config()).unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let loaded = ProjectConfig::load_from(file.path()).unwrap();
        assert_eq!(loaded, sample_config());
    }

    #[test]
    fn test_load_from_rejects_incomplete_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"api_key = \"k\"\n").unwrap();

        assert!(ProjectConfig::load_from(file.path()).is_err());
    }
}
