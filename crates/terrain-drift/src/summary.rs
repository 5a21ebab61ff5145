//! Human-readable drift summary and recommendation, in priority order:
//! type change, then modifier change, then stable.

use terrain_core::models::DriftRecommendation;
use terrain_core::taxonomy::{display, Modifier};

pub const RETAKE_ASSESSMENT: &str =
    "Your terrain has shifted. Consider retaking the full assessment.";
pub const STABLE: &str = "Your terrain is stable.";

pub fn recommendation(type_changed: bool, modifier_changed: bool) -> DriftRecommendation {
    if type_changed {
        DriftRecommendation::SignificantDrift
    } else if modifier_changed {
        DriftRecommendation::MinorShift
    } else {
        DriftRecommendation::NoChange
    }
}

pub fn describe(type_changed: bool, modifier_changed: bool, pulse_modifier: Modifier) -> String {
    if type_changed {
        RETAKE_ASSESSMENT.to_string()
    } else if modifier_changed {
        format!(
            "Your secondary pattern has shifted to {}.",
            display::modifier(pulse_modifier).label
        )
    } else {
        STABLE.to_string()
    }
}
