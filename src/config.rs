//! Configuration for the review core
//!
//! Loaded from an optional TOML file layered under `RISK_ANALYST__*`
//! environment variables (double underscore separates sections, e.g.
//! `RISK_ANALYST__CATALOG__MISS_POLICY=strict`). A `.env` file is read first.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RISK_ANALYST";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub scores: ScoreConfig,
}

impl Config {
    /// Load configuration from `path` (if given and present) and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Ok(dotenv) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", dotenv.display());
        }

        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        let config: Config = builder.build()?.try_deserialize()?;
        debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// What a catalog lookup does with an unknown identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissPolicy {
    /// Resolve to the catalog's canonical record
    Fallback,
    /// Report the identifier as not found
    Strict,
}

impl Default for MissPolicy {
    fn default() -> Self {
        Self::Fallback
    }
}

/// Analysis catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub miss_policy: MissPolicy,
}

/// What to do with confidence scores outside `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorePolicy {
    Clamp,
    Reject,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self::Clamp
    }
}

/// Confidence score configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreConfig {
    #[serde(default)]
    pub out_of_range: ScorePolicy,
}
