use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::TerrainError;

/// Classified position on the coldHeat axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureTendency {
    Cold,
    Neutral,
    Warm,
}

/// Classified position on the defExcess axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyTendency {
    Deficient,
    Balanced,
    Excess,
}

/// The eight constitutional archetypes.
///
/// Nine temperature × energy combinations collapse to eight: cold × excess
/// is folded into [`PrimaryType::ColdBalanced`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum PrimaryType {
    #[serde(rename = "cold_deficient_low_flame")]
    ColdDeficient,
    #[serde(rename = "cold_balanced_cool_core")]
    ColdBalanced,
    #[serde(rename = "neutral_deficient_low_battery")]
    NeutralDeficient,
    #[default]
    #[serde(rename = "neutral_balanced_steady_core")]
    NeutralBalanced,
    #[serde(rename = "neutral_excess_busy_mind")]
    NeutralExcess,
    #[serde(rename = "warm_deficient_overclocked")]
    WarmDeficient,
    #[serde(rename = "warm_balanced_high_flame")]
    WarmBalanced,
    #[serde(rename = "warm_excess_overdrive")]
    WarmExcess,
}

impl PrimaryType {
    pub const ALL: [PrimaryType; 8] = [
        PrimaryType::ColdDeficient,
        PrimaryType::ColdBalanced,
        PrimaryType::NeutralDeficient,
        PrimaryType::NeutralBalanced,
        PrimaryType::NeutralExcess,
        PrimaryType::WarmDeficient,
        PrimaryType::WarmBalanced,
        PrimaryType::WarmExcess,
    ];

    /// Stable snake_case identifier. Downstream content tables key off these.
    pub fn id(self) -> &'static str {
        match self {
            PrimaryType::ColdDeficient => "cold_deficient_low_flame",
            PrimaryType::ColdBalanced => "cold_balanced_cool_core",
            PrimaryType::NeutralDeficient => "neutral_deficient_low_battery",
            PrimaryType::NeutralBalanced => "neutral_balanced_steady_core",
            PrimaryType::NeutralExcess => "neutral_excess_busy_mind",
            PrimaryType::WarmDeficient => "warm_deficient_overclocked",
            PrimaryType::WarmBalanced => "warm_balanced_high_flame",
            PrimaryType::WarmExcess => "warm_excess_overdrive",
        }
    }

    /// The 3×3 decision table. Cold × excess maps to cold × balanced.
    pub fn from_tendencies(temperature: TemperatureTendency, energy: EnergyTendency) -> Self {
        use EnergyTendency::*;
        use TemperatureTendency::*;

        match (temperature, energy) {
            (Cold, Deficient) => PrimaryType::ColdDeficient,
            (Cold, Balanced) | (Cold, Excess) => PrimaryType::ColdBalanced,
            (Neutral, Deficient) => PrimaryType::NeutralDeficient,
            (Neutral, Balanced) => PrimaryType::NeutralBalanced,
            (Neutral, Excess) => PrimaryType::NeutralExcess,
            (Warm, Deficient) => PrimaryType::WarmDeficient,
            (Warm, Balanced) => PrimaryType::WarmBalanced,
            (Warm, Excess) => PrimaryType::WarmExcess,
        }
    }

    pub fn temperature(self) -> TemperatureTendency {
        match self {
            PrimaryType::ColdDeficient | PrimaryType::ColdBalanced => TemperatureTendency::Cold,
            PrimaryType::NeutralDeficient
            | PrimaryType::NeutralBalanced
            | PrimaryType::NeutralExcess => TemperatureTendency::Neutral,
            PrimaryType::WarmDeficient | PrimaryType::WarmBalanced | PrimaryType::WarmExcess => {
                TemperatureTendency::Warm
            }
        }
    }

    pub fn energy(self) -> EnergyTendency {
        match self {
            PrimaryType::ColdDeficient
            | PrimaryType::NeutralDeficient
            | PrimaryType::WarmDeficient => EnergyTendency::Deficient,
            PrimaryType::ColdBalanced
            | PrimaryType::NeutralBalanced
            | PrimaryType::WarmBalanced => EnergyTendency::Balanced,
            PrimaryType::NeutralExcess | PrimaryType::WarmExcess => EnergyTendency::Excess,
        }
    }

    /// Lenient parse for stored profiles: anything unrecognized (including
    /// absent) becomes the default.
    pub fn parse_or_default(id: Option<&str>) -> Self {
        id.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for PrimaryType {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimaryType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| TerrainError::UnknownPrimaryType { id: s.to_string() })
    }
}

impl std::fmt::Display for PrimaryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
