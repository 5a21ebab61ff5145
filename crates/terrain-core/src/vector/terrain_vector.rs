use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::{Axis, TerrainDelta};

/// Five clamped axes describing a constitutional tendency.
///
/// Every constructor and mutator clamps each axis to its declared range
/// (see [`Axis::min`] / [`Axis::max`]); out-of-range input is clamped, never
/// rejected. Deserialization clamps too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TerrainVector {
    cold_heat: i32,
    def_excess: i32,
    damp_dry: i32,
    qi_stagnation: i32,
    shen_unsettled: i32,
}

impl TerrainVector {
    /// The all-zero starting vector of a scoring pass.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build a vector, clamping every axis.
    pub fn new(
        cold_heat: i32,
        def_excess: i32,
        damp_dry: i32,
        qi_stagnation: i32,
        shen_unsettled: i32,
    ) -> Self {
        Self {
            cold_heat: Axis::ColdHeat.clamp(cold_heat),
            def_excess: Axis::DefExcess.clamp(def_excess),
            damp_dry: Axis::DampDry.clamp(damp_dry),
            qi_stagnation: Axis::QiStagnation.clamp(qi_stagnation),
            shen_unsettled: Axis::ShenUnsettled.clamp(shen_unsettled),
        }
    }

    pub fn cold_heat(&self) -> i32 {
        self.cold_heat
    }

    pub fn def_excess(&self) -> i32 {
        self.def_excess
    }

    pub fn damp_dry(&self) -> i32 {
        self.damp_dry
    }

    pub fn qi_stagnation(&self) -> i32 {
        self.qi_stagnation
    }

    pub fn shen_unsettled(&self) -> i32 {
        self.shen_unsettled
    }

    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::ColdHeat => self.cold_heat,
            Axis::DefExcess => self.def_excess,
            Axis::DampDry => self.damp_dry,
            Axis::QiStagnation => self.qi_stagnation,
            Axis::ShenUnsettled => self.shen_unsettled,
        }
    }

    /// Overwrite one axis (clamped). Used by the pulse check-in, where each
    /// axis is answered exactly once.
    pub fn set(&mut self, axis: Axis, value: i32) {
        let value = axis.clamp(value);
        match axis {
            Axis::ColdHeat => self.cold_heat = value,
            Axis::DefExcess => self.def_excess = value,
            Axis::DampDry => self.damp_dry = value,
            Axis::QiStagnation => self.qi_stagnation = value,
            Axis::ShenUnsettled => self.shen_unsettled = value,
        }
    }

    /// Add a delta in place, clamping after the addition.
    ///
    /// Clamping happens on every step, so magnitude pushed past a bound is
    /// lost: `+8, +8, -8` on coldHeat ends at 2, not 8.
    pub fn add_delta(&mut self, delta: &TerrainDelta) {
        for axis in Axis::ALL {
            let sum = self.get(axis).saturating_add(delta.get(axis));
            self.set(axis, sum);
        }
    }

    /// By-value form of [`add_delta`](Self::add_delta).
    pub fn with_delta(mut self, delta: &TerrainDelta) -> Self {
        self.add_delta(delta);
        self
    }
}

impl From<TerrainDelta> for TerrainVector {
    fn from(delta: TerrainDelta) -> Self {
        Self::new(
            delta.cold_heat,
            delta.def_excess,
            delta.damp_dry,
            delta.qi_stagnation,
            delta.shen_unsettled,
        )
    }
}

impl<'de> Deserialize<'de> for TerrainVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Same wire shape as a delta; route through `new` to clamp.
        TerrainDelta::deserialize(deserializer).map(TerrainVector::from)
    }
}
