use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::registry::RegistryConfig;
use super::state::StateConfig;

/// Main configuration structure for the resolver.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Registry endpoint configuration
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Local state (TLD cache) configuration
    #[serde(default)]
    pub state: StateConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. uns-resolver.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("uns-resolver.toml").exists() {
            Self::from_file("uns-resolver.toml")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// The API key is a deploy-time secret, so the environment wins over
    /// anything committed to a config file.
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("UNS_API_KEY") {
            if !key.is_empty() {
                self.registry.api_key = Some(key);
            }
        }
    }
}
