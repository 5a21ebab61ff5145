use proptest::prelude::*;
use terrain_core::vector::{Axis, TerrainDelta, TerrainVector};

fn arb_delta() -> impl Strategy<Value = TerrainDelta> {
    (
        -40i32..40,
        -40i32..40,
        -40i32..40,
        -40i32..40,
        -40i32..40,
    )
        .prop_map(|(a, b, c, d, e)| TerrainDelta::new(a, b, c, d, e))
}

fn in_range(v: &TerrainVector) -> bool {
    Axis::ALL
        .iter()
        .all(|&axis| (axis.min()..=axis.max()).contains(&v.get(axis)))
}

// ── Clamp invariant holds for every reachable vector ──────────────────────

proptest! {
    #[test]
    fn accumulated_vector_stays_in_range(deltas in prop::collection::vec(arb_delta(), 0..50)) {
        let mut v = TerrainVector::zero();
        for delta in &deltas {
            v.add_delta(delta);
            prop_assert!(in_range(&v), "out of range after {:?}: {:?}", delta, v);
        }
    }

    #[test]
    fn constructed_vector_stays_in_range(
        a in any::<i32>(), b in any::<i32>(), c in any::<i32>(), d in any::<i32>(), e in any::<i32>()
    ) {
        prop_assert!(in_range(&TerrainVector::new(a, b, c, d, e)));
    }

    #[test]
    fn clamping_is_idempotent(a in any::<i32>(), b in any::<i32>(), c in any::<i32>(), d in any::<i32>(), e in any::<i32>()) {
        let once = TerrainVector::new(a, b, c, d, e);
        let twice = TerrainVector::new(
            once.cold_heat(), once.def_excess(), once.damp_dry(),
            once.qi_stagnation(), once.shen_unsettled(),
        );
        prop_assert_eq!(once, twice);
    }
}

// ── Weighting never grows magnitude below unit weight ─────────────────────

proptest! {
    #[test]
    fn fractional_weight_never_increases_magnitude(delta in arb_delta(), weight in 0.0f64..1.0) {
        let w = delta.weighted(weight);
        for axis in Axis::ALL {
            prop_assert!(w.get(axis).abs() <= delta.get(axis).abs());
            prop_assert!(w.get(axis) == 0 || w.get(axis).signum() == delta.get(axis).signum());
        }
    }

    #[test]
    fn unit_weight_is_identity(delta in arb_delta()) {
        prop_assert_eq!(delta.weighted(1.0), delta);
    }
}
