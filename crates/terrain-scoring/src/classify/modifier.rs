//! Secondary pattern selection.
//!
//! Candidates: shen if shenUnsettled ≥ 4, stagnation if qiStagnation ≥ 4,
//! damp if dampDry ≤ -3 else dry if dampDry ≥ 3. Magnitude decides; priority
//! (shen < stagnation < damp/dry) only breaks exact ties.

use std::cmp::Ordering;

use terrain_core::config::ClassificationConfig;
use terrain_core::taxonomy::Modifier;
use terrain_core::vector::TerrainVector;

/// A modifier that qualified, with the axis magnitude it qualified on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierCandidate {
    pub modifier: Modifier,
    pub magnitude: i32,
}

impl ModifierCandidate {
    /// Larger magnitude first; on a tie, lower priority rank first.
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .magnitude
            .cmp(&self.magnitude)
            .then_with(|| self.modifier.priority().cmp(&other.modifier.priority()))
    }
}

/// All qualifying candidates, in priority order.
pub fn candidates(vector: &TerrainVector, config: &ClassificationConfig) -> Vec<ModifierCandidate> {
    let mut out = Vec::with_capacity(3);

    if vector.shen_unsettled() >= config.intensity_threshold {
        out.push(ModifierCandidate {
            modifier: Modifier::Shen,
            magnitude: vector.shen_unsettled(),
        });
    }
    if vector.qi_stagnation() >= config.intensity_threshold {
        out.push(ModifierCandidate {
            modifier: Modifier::Stagnation,
            magnitude: vector.qi_stagnation(),
        });
    }

    // Opposite signs of one axis: at most one of these qualifies.
    let damp_dry = vector.damp_dry();
    if damp_dry <= -config.moisture_threshold {
        out.push(ModifierCandidate {
            modifier: Modifier::Damp,
            magnitude: damp_dry.abs(),
        });
    } else if damp_dry >= config.moisture_threshold {
        out.push(ModifierCandidate {
            modifier: Modifier::Dry,
            magnitude: damp_dry,
        });
    }

    out
}

/// Pick the winning candidate, or [`Modifier::None`] if nothing qualified.
pub fn select(candidates: &[ModifierCandidate]) -> Modifier {
    candidates
        .iter()
        .min_by(|a, b| a.rank(b))
        .map(|c| c.modifier)
        .unwrap_or(Modifier::None)
}
