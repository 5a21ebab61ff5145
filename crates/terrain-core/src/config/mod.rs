//! Configuration for the terrain engines, loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields the
//! defaults in [`defaults`].

mod classification_config;
pub mod defaults;
mod observability_config;
mod scoring_config;

pub use classification_config::ClassificationConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TerrainError, TerrainResult};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub classification: ClassificationConfig,
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

impl TerrainConfig {
    /// Parse a TOML document. Missing sections and fields fall back to defaults.
    pub fn from_toml(source: &str) -> TerrainResult<Self> {
        toml::from_str(source).map_err(|e| TerrainError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> TerrainResult<String> {
        toml::to_string(self).map_err(|e| TerrainError::ConfigError {
            reason: e.to_string(),
        })
    }
}
