use proptest::prelude::*;
use terrain_core::catalog::{Question, QuestionCatalog, QuizOption};
use terrain_core::models::QuizResponse;
use terrain_core::taxonomy::Modifier;
use terrain_core::traits::ITerrainScorer;
use terrain_core::vector::{Axis, TerrainDelta, TerrainVector};
use terrain_scoring::{ScoringEngine, TerrainClassifier};

/// Ten questions with three options each, deltas large enough to hit the bounds.
fn wide_catalog() -> QuestionCatalog {
    let questions = (0..10)
        .map(|q| {
            let options = (0..3)
                .map(|o| {
                    let sign = if o % 2 == 0 { 1 } else { -1 };
                    let magnitude = (q + o * 3) % 9 + 1;
                    QuizOption::new(
                        format!("o{o}"),
                        TerrainDelta::new(
                            sign * magnitude,
                            -sign * (magnitude / 2),
                            sign * (q % 4),
                            magnitude,
                            if q % 2 == 0 { magnitude } else { -magnitude },
                        ),
                    )
                })
                .collect();
            let weight = if q % 3 == 0 { 0.6 } else { 1.0 };
            Question::new(format!("q{q}"), options).with_weight(weight)
        })
        .collect();
    QuestionCatalog::from_questions(questions).unwrap()
}

fn arb_responses() -> impl Strategy<Value = Vec<QuizResponse>> {
    // Includes out-of-catalog ids (q10..q11, o3) so skipping is exercised too.
    prop::collection::vec((0..12usize, 0..4usize), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(q, o)| QuizResponse::new(format!("q{q}"), format!("o{o}")))
            .collect()
    })
}

fn arb_vector() -> impl Strategy<Value = TerrainVector> {
    (-10i32..=10, -10i32..=10, -10i32..=10, 0i32..=10, 0i32..=10)
        .prop_map(|(a, b, c, d, e)| TerrainVector::new(a, b, c, d, e))
}

// ── Determinism & clamp invariant ─────────────────────────────────────────

proptest! {
    #[test]
    fn scoring_is_deterministic(input in arb_responses()) {
        let catalog = wide_catalog();
        let engine = ScoringEngine::new(&catalog);
        prop_assert_eq!(engine.calculate_terrain(&input), engine.calculate_terrain(&input));
    }

    #[test]
    fn scored_vector_stays_in_range(input in arb_responses()) {
        let catalog = wide_catalog();
        let engine = ScoringEngine::new(&catalog);
        let v = engine.calculate_terrain(&input).vector;
        for axis in Axis::ALL {
            prop_assert!(v.get(axis) >= axis.min() && v.get(axis) <= axis.max());
        }
    }

    #[test]
    fn skipped_plus_applied_accounts_for_every_response(input in arb_responses()) {
        let catalog = wide_catalog();
        let engine = ScoringEngine::new(&catalog);
        let pass = engine.score(&input);
        let unresolved = input
            .iter()
            .filter(|r| {
                let q: usize = r.question_id[1..].parse().unwrap();
                let o: usize = r.option_id[1..].parse().unwrap();
                q >= 10 || o >= 3
            })
            .count();
        prop_assert_eq!(pass.skipped.len(), unresolved);
    }
}

// ── Modifier selection properties ─────────────────────────────────────────

proptest! {
    #[test]
    fn modifier_is_none_iff_nothing_qualifies(v in arb_vector()) {
        let qualifies = v.shen_unsettled() >= 4
            || v.qi_stagnation() >= 4
            || v.damp_dry() <= -3
            || v.damp_dry() >= 3;
        let modifier = TerrainClassifier::default().modifier(&v);
        prop_assert_eq!(modifier == Modifier::None, !qualifies);
    }

    #[test]
    fn chosen_modifier_has_the_largest_magnitude(v in arb_vector()) {
        let modifier = TerrainClassifier::default().modifier(&v);
        let magnitude = |m: Modifier| match m {
            Modifier::Shen => v.shen_unsettled(),
            Modifier::Stagnation => v.qi_stagnation(),
            Modifier::Damp | Modifier::Dry => v.damp_dry().abs(),
            Modifier::None => 0,
        };
        if modifier != Modifier::None {
            let chosen = magnitude(modifier);
            if v.shen_unsettled() >= 4 {
                prop_assert!(chosen >= v.shen_unsettled());
            }
            if v.qi_stagnation() >= 4 {
                prop_assert!(chosen >= v.qi_stagnation());
            }
            if v.damp_dry().abs() >= 3 {
                prop_assert!(chosen >= v.damp_dry().abs());
            }
        }
    }

    #[test]
    fn cold_excess_never_escapes_cold_balanced(cold in -10i32..=-3, excess in 3i32..=10) {
        let classifier = TerrainClassifier::default();
        prop_assert_eq!(
            classifier.primary_type(&TerrainVector::new(cold, excess, 0, 0, 0)),
            classifier.primary_type(&TerrainVector::new(cold, 0, 0, 0, 0))
        );
    }
}
