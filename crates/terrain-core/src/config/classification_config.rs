use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for primary type and modifier classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// coldHeat / defExcess magnitude at which an axis leaves its neutral band.
    pub primary_threshold: i32,
    /// qiStagnation / shenUnsettled value at which the pattern qualifies as a modifier.
    pub intensity_threshold: i32,
    /// dampDry magnitude at which damp or dry qualifies as a modifier.
    pub moisture_threshold: i32,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            primary_threshold: defaults::DEFAULT_PRIMARY_THRESHOLD,
            intensity_threshold: defaults::DEFAULT_INTENSITY_THRESHOLD,
            moisture_threshold: defaults::DEFAULT_MOISTURE_THRESHOLD,
        }
    }
}
