use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::taxonomy::{Modifier, PrimaryType};

/// What the caller should do about a pulse check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DriftRecommendation {
    /// Type and modifier both match the stored profile.
    NoChange,
    /// Only the modifier moved.
    MinorShift,
    /// The primary type moved; the full assessment should be retaken.
    SignificantDrift,
}

impl DriftRecommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            DriftRecommendation::NoChange => "no_change",
            DriftRecommendation::MinorShift => "minor_shift",
            DriftRecommendation::SignificantDrift => "significant_drift",
        }
    }
}

/// Comparison between a stored terrain and a pulse check-in.
///
/// `current_*` are the stored values after lenient parsing, so a corrupted
/// stored id shows up here as the default it degraded to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TerrainDriftResult {
    pub current_type: PrimaryType,
    pub current_modifier: Modifier,
    pub pulse_type: PrimaryType,
    pub pulse_modifier: Modifier,
    pub has_drifted: bool,
    pub drift_summary: String,
    pub recommendation: DriftRecommendation,
}

impl TerrainDriftResult {
    pub fn type_changed(&self) -> bool {
        self.current_type != self.pulse_type
    }

    pub fn modifier_changed(&self) -> bool {
        self.current_modifier != self.pulse_modifier
    }
}
