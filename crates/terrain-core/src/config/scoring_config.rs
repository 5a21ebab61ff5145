use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Log unresolved (question, option) pairs at `warn` instead of `debug`.
    pub warn_on_skipped_responses: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            warn_on_skipped_responses: defaults::DEFAULT_WARN_ON_SKIPPED_RESPONSES,
        }
    }
}
