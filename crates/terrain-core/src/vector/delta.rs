use serde::{Deserialize, Serialize};

use super::Axis;

/// An unclamped signed contribution attached to one quiz option.
///
/// Missing axes deserialize as zero, so catalog entries only list the axes
/// they move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TerrainDelta {
    pub cold_heat: i32,
    pub def_excess: i32,
    pub damp_dry: i32,
    pub qi_stagnation: i32,
    pub shen_unsettled: i32,
}

impl TerrainDelta {
    pub const ZERO: TerrainDelta = TerrainDelta {
        cold_heat: 0,
        def_excess: 0,
        damp_dry: 0,
        qi_stagnation: 0,
        shen_unsettled: 0,
    };

    pub fn new(
        cold_heat: i32,
        def_excess: i32,
        damp_dry: i32,
        qi_stagnation: i32,
        shen_unsettled: i32,
    ) -> Self {
        Self {
            cold_heat,
            def_excess,
            damp_dry,
            qi_stagnation,
            shen_unsettled,
        }
    }

    /// A delta that moves a single axis.
    pub fn single(axis: Axis, value: i32) -> Self {
        let mut delta = Self::ZERO;
        *delta.get_mut(axis) = value;
        delta
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

    fn get_mut(&mut self, axis: Axis) -> &mut i32 {
        match axis {
            Axis::ColdHeat => &mut self.cold_heat,
            Axis::DefExcess => &mut self.def_excess,
            Axis::DampDry => &mut self.damp_dry,
            Axis::QiStagnation => &mut self.qi_stagnation,
            Axis::ShenUnsettled => &mut self.shen_unsettled,
        }
    }

    /// Scale every axis by `weight`, truncating toward zero.
    ///
    /// Truncation, not rounding: `-1 * 0.6` contributes `0`, `3 * 0.6`
    /// contributes `1`. The `as` cast also saturates at the i32 bounds.
    pub fn weighted(&self, weight: f64) -> Self {
        let scale = |value: i32| (f64::from(value) * weight) as i32;
        Self {
            cold_heat: scale(self.cold_heat),
            def_excess: scale(self.def_excess),
            damp_dry: scale(self.damp_dry),
            qi_stagnation: scale(self.qi_stagnation),
            shen_unsettled: scale(self.shen_unsettled),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
