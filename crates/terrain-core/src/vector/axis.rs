use serde::{Deserialize, Serialize};

use crate::constants::{AXIS_MAX, INTENSITY_AXIS_MIN, SIGNED_AXIS_MIN};

/// One of the five scored dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Negative = cold-leaning, positive = heat-leaning.
    ColdHeat,
    /// Negative = deficient, positive = excess.
    DefExcess,
    /// Negative = damp, positive = dry.
    DampDry,
    /// Higher = more stuck/tense.
    QiStagnation,
    /// Higher = more mentally/sleep unsettled.
    ShenUnsettled,
}

impl Axis {
    /// All axes in declaration order.
    pub const ALL: [Axis; 5] = [
        Axis::ColdHeat,
        Axis::DefExcess,
        Axis::DampDry,
        Axis::QiStagnation,
        Axis::ShenUnsettled,
    ];

    /// Inclusive lower bound.
    pub fn min(self) -> i32 {
        match self {
            Axis::ColdHeat | Axis::DefExcess | Axis::DampDry => SIGNED_AXIS_MIN,
            Axis::QiStagnation | Axis::ShenUnsettled => INTENSITY_AXIS_MIN,
        }
    }

    /// Inclusive upper bound.
    pub fn max(self) -> i32 {
        AXIS_MAX
    }

    /// Clamp a raw value into this axis' range.
    pub fn clamp(self, value: i32) -> i32 {
        value.clamp(self.min(), self.max())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::ColdHeat => "cold_heat",
            Axis::DefExcess => "def_excess",
            Axis::DampDry => "damp_dry",
            Axis::QiStagnation => "qi_stagnation",
            Axis::ShenUnsettled => "shen_unsettled",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
