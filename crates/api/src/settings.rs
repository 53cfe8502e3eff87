//! Server Settings

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Runtime settings for the API server
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Bind address, e.g. "0.0.0.0:8080"
    pub bind_addr: String,
    /// Ceiling on decision records returned per query
    pub history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            history_limit: 500,
        }
    }
}

impl Settings {
    /// Load settings: defaults layered under SELFHEAL_* environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_addr", "0.0.0.0:8080")?
            .set_default("history_limit", 500_i64)?
            .add_source(Environment::with_prefix("SELFHEAL"))
            .build()?
            .try_deserialize()
    }
}
