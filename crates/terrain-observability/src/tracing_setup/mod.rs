//! Installs the global `tracing` subscriber from [`ObservabilityConfig`].

pub mod spans;

use terrain_core::config::ObservabilityConfig;
use terrain_core::errors::{TerrainError, TerrainResult};
use tracing_subscriber::EnvFilter;

/// Build the `EnvFilter` for a config. `RUST_LOG` is not consulted; the
/// config's `log_level` is the single source.
pub fn env_filter(config: &ObservabilityConfig) -> TerrainResult<EnvFilter> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TerrainError::TracingInit {
        reason: format!("invalid log level {:?}: {e}", config.log_level),
    })
}

/// Install a global fmt subscriber. Fails if one is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> TerrainResult<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TerrainError::TracingInit {
        reason: e.to_string(),
    })
}
