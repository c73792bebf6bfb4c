//! Configuration loading and management

use crate::entities::{Dish, Order};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0")
    #[validate(length(min = 1, message = "host must not be empty"))]
    pub host: String,

    /// TCP port
    #[validate(range(min = 1, message = "port must be greater than 0"))]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Records loaded into the collections at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dishes: Vec<Dish>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,

    #[serde(default)]
    pub seed: SeedData,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate_config()?;
        Ok(config)
    }

    /// Apply `PORT` and `GRUBDASH_HOST` from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(
            std::env::var("GRUBDASH_HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    /// Apply explicit host/port overrides; blank values are ignored
    pub fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Result<Self> {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid port: {}", port))?;
        }
        self.validate_config()?;
        Ok(self)
    }

    /// Socket address string for the listener
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Run the field validators
    pub fn validate_config(&self) -> Result<()> {
        self.validate()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))
    }
}
