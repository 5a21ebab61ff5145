//! Primary type: coldHeat and defExcess each fall into one of three bands.
//!
//! `≤ -threshold` / `≥ threshold` leave the middle band; both ends are inclusive.

use terrain_core::config::ClassificationConfig;
use terrain_core::taxonomy::{EnergyTendency, PrimaryType, TemperatureTendency};
use terrain_core::vector::TerrainVector;

pub fn temperature(cold_heat: i32, threshold: i32) -> TemperatureTendency {
    if cold_heat <= -threshold {
        TemperatureTendency::Cold
    } else if cold_heat >= threshold {
        TemperatureTendency::Warm
    } else {
        TemperatureTendency::Neutral
    }
}

pub fn energy(def_excess: i32, threshold: i32) -> EnergyTendency {
    if def_excess <= -threshold {
        EnergyTendency::Deficient
    } else if def_excess >= threshold {
        EnergyTendency::Excess
    } else {
        EnergyTendency::Balanced
    }
}

pub fn classify(vector: &TerrainVector, config: &ClassificationConfig) -> PrimaryType {
    let threshold = config.primary_threshold;
    PrimaryType::from_tendencies(
        temperature(vector.cold_heat(), threshold),
        energy(vector.def_excess(), threshold),
    )
}
