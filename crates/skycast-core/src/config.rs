use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Weather API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Startup location settings
    #[serde(default)]
    pub location: LocationConfig,
}

/// OpenWeatherMap API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// OpenWeatherMap API key
    /// Create one at: https://openweathermap.org/api
    pub api_key: String,

    /// API base URL
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

fn default_api_base_url() -> String {
    "https://api.openweathermap.org/data/2.5/".to_string()
}

impl ApiConfig {
    /// Check if an API key is configured (not a placeholder)
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.api_key.starts_with("YOUR_")
    }

    /// The key to use: the config file's if set, otherwise the
    /// `OWM_API_KEY` environment variable.
    pub fn resolved_key(&self) -> Option<String> {
        if self.is_configured() {
            return Some(self.api_key.clone());
        }
        std::env::var("OWM_API_KEY").ok().filter(|k| !k.is_empty())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: "YOUR_OPENWEATHERMAP_API_KEY".to_string(),
            base_url: default_api_base_url(),
        }
    }
}

/// Coordinate used for the unconditional fetch at startup, before
/// geolocation has resolved or the user has searched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub default_latitude: f64,
    pub default_longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_latitude: 27.7172,
            default_longitude: 85.324,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skycast");

        Self {
            config_dir,
            api: ApiConfig::default(),
            location: LocationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("skycast");
        Ok(config_dir.join("config.toml"))
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !(-90.0..=90.0).contains(&self.location.default_latitude) {
            result.add_error(
                "location.default_latitude",
                "Latitude must be between -90 and 90",
            );
        }

        if !(-180.0..=180.0).contains(&self.location.default_longitude) {
            result.add_error(
                "location.default_longitude",
                "Longitude must be between -180 and 180",
            );
        }

        if self.api.base_url.is_empty() {
            result.add_error("api.base_url", "API base URL must not be empty");
        }

        if self.api.resolved_key().is_none() {
            result.add_warning(
                "api.api_key",
                "No API key configured - weather requests will be rejected",
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        let validation = config.validate();
        assert!(validation.is_valid());
        assert_eq!(config.location.default_latitude, 27.7172);
        assert_eq!(config.location.default_longitude, 85.324);
    }

    #[test]
    fn test_placeholder_key_is_not_configured() {
        let api = ApiConfig::default();
        assert!(!api.is_configured());

        let api = ApiConfig {
            api_key: "abc123".to_string(),
            ..ApiConfig::default()
        };
        assert!(api.is_configured());
        assert_eq!(api.resolved_key().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let mut config = Config::default();
        config.location.default_latitude = 91.0;
        config.location.default_longitude = -200.0;

        let validation = config.validate();
        assert!(!validation.is_valid());
        assert_eq!(validation.errors.len(), 2);
        assert!(validation.error_summary().contains("Latitude"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.api.api_key = "roundtrip-key".to_string();
        config.location.default_latitude = 51.5;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.api_key, "roundtrip-key");
        assert_eq!(loaded.location.default_latitude, 51.5);
        assert_eq!(loaded.location.default_longitude, 85.324);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let toml = r#"config_dir = "/tmp/skycast""#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.api.is_configured());
        assert_eq!(config.location.default_latitude, 27.7172);
    }
}
