//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/city-suggest/config.toml

pub mod defaults;

use crate::constants::ranking::{MAX_SUGGESTIONS, WEIGHT_LOCATION, WEIGHT_NAME};
use crate::error::{Error, Result};
use crate::suggest::score::Weights;
use crate::suggest::RankingOptions;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Gazetteer data source
    #[serde(default)]
    pub data: DataConfig,

    /// Ranking parameters
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Gazetteer data source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the JSON gazetteer
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

/// Ranking settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Maximum suggestions per query (zero or negative: unlimited)
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: i64,

    /// Weight of the name score
    #[serde(default = "default_weight_name")]
    pub weight_name: f64,

    /// Weight of the location score
    #[serde(default = "default_weight_location")]
    pub weight_location: f64,
}

// Default value functions for serde
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}
fn default_max_suggestions() -> i64 {
    MAX_SUGGESTIONS
}
fn default_weight_name() -> f64 {
    WEIGHT_NAME
}
fn default_weight_location() -> f64 {
    WEIGHT_LOCATION
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            weight_name: default_weight_name(),
            weight_location: default_weight_location(),
        }
    }
}

impl RankingConfig {
    /// Ranking options for the suggestion engine
    pub fn options(&self) -> RankingOptions {
        RankingOptions {
            max_suggestions: self.max_suggestions,
            weights: Weights {
                name: self.weight_name,
                location: self.weight_location,
            },
        }
    }
}

/// Parse a score weight: finite and non-negative
fn parse_weight(value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w >= 0.0)
        .ok_or_else(|| Error::Config(format!("Invalid weight value: {}", value)))
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file
    ///
    /// Writes a default config there if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            let config: Config = toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Check values that serde alone cannot constrain
    pub fn validate(&self) -> Result<()> {
        for (key, weight) in [
            ("ranking.weight_name", self.ranking.weight_name),
            ("ranking.weight_location", self.ranking.weight_location),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::Config(format!("{} must be a non-negative number", key)));
            }
        }
        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["data", "path"] => Some(self.data.path.display().to_string()),

            ["ranking", "max_suggestions"] => Some(self.ranking.max_suggestions.to_string()),
            ["ranking", "weight_name"] => Some(self.ranking.weight_name.to_string()),
            ["ranking", "weight_location"] => Some(self.ranking.weight_location.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            ["data", "path"] => {
                self.data.path = PathBuf::from(value);
            }

            ["ranking", "max_suggestions"] => {
                self.ranking.max_suggestions = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid max_suggestions value: {}", value))
                })?;
            }
            ["ranking", "weight_name"] => {
                self.ranking.weight_name = parse_weight(value)?;
            }
            ["ranking", "weight_location"] => {
                self.ranking.weight_location = parse_weight(value)?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "server.host",
            "server.port",
            "data.path",
            "ranking.max_suggestions",
            "ranking.weight_name",
            "ranking.weight_location",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
