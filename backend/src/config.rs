//! Configuration management for the Drought Early Warning System
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with DEWS_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Region;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Region the assessments are reported for
    pub region: RegionConfig,

    /// Remote drought classifier configuration
    pub model: ModelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegionConfig {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Prediction endpoint; predictions are skipped when unset
    pub endpoint: Option<String>,

    /// Sent as `x-api-key` when set
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("DEWS_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("region.name", "Mekong Delta")?
            .set_default("region.country", "Vietnam")?
            .set_default("model.timeout_secs", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (DEWS_ prefix)
            .add_source(
                Environment::with_prefix("DEWS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl From<&RegionConfig> for Region {
    fn from(config: &RegionConfig) -> Self {
        Region::new(config.name.clone(), config.country.clone())
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        let region = Region::default();
        Self {
            name: region.name,
            country: region.country,
        }
    }
}
