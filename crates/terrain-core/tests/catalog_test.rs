use terrain_core::catalog::{Goal, Question, QuestionCatalog, QuizOption};
use terrain_core::errors::CatalogError;
use terrain_core::traits::IQuestionCatalog;
use terrain_core::vector::{Axis, TerrainDelta};
use terrain_core::{QuizFlag, TerrainError};

const CATALOG_JSON: &str = r#"{
  "questions": [
    {
      "id": "temperature",
      "options": [
        { "id": "always_cold", "delta": { "coldHeat": -4 }, "flags": ["cold_extremities"] },
        { "id": "comfortable" }
      ]
    },
    {
      "id": "skin_moisture",
      "weight": 0.6,
      "options": [
        { "id": "oily", "delta": { "dampDry": -1 } },
        { "id": "dry_flaky", "delta": { "dampDry": 3 } }
      ]
    },
    {
      "id": "cycle_comfort",
      "goal_requirement": "hormones",
      "options": [ { "id": "cramping", "delta": { "qiStagnation": 3 } } ]
    }
  ]
}"#;

// ── Loading ───────────────────────────────────────────────────────────────

#[test]
fn json_catalog_loads_with_defaults() {
    let catalog = QuestionCatalog::from_json(CATALOG_JSON).unwrap();
    assert_eq!(catalog.len(), 3);

    let temperature = catalog.question("temperature").unwrap();
    assert_eq!(temperature.weight, 1.0, "weight defaults to 1.0");
    assert!(temperature.goal_requirement.is_none());

    let cold = temperature.option("always_cold").unwrap();
    assert_eq!(cold.delta, TerrainDelta::single(Axis::ColdHeat, -4));
    assert!(cold.flags.contains(&QuizFlag::ColdExtremities));

    let comfortable = temperature.option("comfortable").unwrap();
    assert!(comfortable.delta.is_zero());
    assert!(comfortable.flags.is_empty());
}

#[test]
fn toml_catalog_loads() {
    let source = r#"
[[questions]]
id = "energy"

[[questions.options]]
id = "exhausted"
delta = { defExcess = -4 }

[[questions.options]]
id = "steady"
"#;
    let catalog = QuestionCatalog::from_toml(source).unwrap();
    let energy = catalog.question("energy").unwrap();
    assert_eq!(energy.options.len(), 2);
    assert_eq!(energy.option("exhausted").unwrap().delta.def_excess, -4);
}

#[test]
fn malformed_json_is_a_catalog_parse_error() {
    let err = QuestionCatalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, TerrainError::Catalog(CatalogError::Parse { .. })));
    assert!(err.to_string().contains("json"));
}

#[test]
fn missing_file_is_a_catalog_io_error() {
    let err = QuestionCatalog::load(std::path::Path::new("/nonexistent/catalog.json")).unwrap_err();
    assert!(matches!(err, TerrainError::Catalog(CatalogError::Io { .. })));
}

#[test]
fn non_finite_or_negative_weight_is_rejected() {
    for weight in [f64::NAN, f64::INFINITY, -0.5] {
        let q = Question::new("bad", vec![]).with_weight(weight);
        let err = QuestionCatalog::from_questions(vec![q]).unwrap_err();
        assert!(
            matches!(err, TerrainError::Catalog(CatalogError::InvalidWeight { .. })),
            "weight {weight} should be rejected"
        );
    }
}

// ── Lookup ────────────────────────────────────────────────────────────────

#[test]
fn unknown_question_lookup_is_none() {
    let catalog = QuestionCatalog::from_json(CATALOG_JSON).unwrap();
    assert!(catalog.question("nope").is_none());
    assert!(catalog
        .question("temperature")
        .unwrap()
        .option("nope")
        .is_none());
}

#[test]
fn duplicate_question_ids_resolve_to_first() {
    let first = Question::new("dup", vec![QuizOption::new("a", TerrainDelta::ZERO)]);
    let second = Question::new("dup", vec![QuizOption::new("b", TerrainDelta::ZERO)]);
    let catalog = QuestionCatalog::from_questions(vec![first, second]).unwrap();
    assert!(catalog.question("dup").unwrap().option("a").is_some());
    assert_eq!(catalog.questions().len(), 2);
}

#[test]
fn weighted_delta_passes_unit_weight_through() {
    let option = QuizOption::new("x", TerrainDelta::new(-1, 1, -1, 1, 1));
    let unit = Question::new("u", vec![option.clone()]);
    let scaled = Question::new("s", vec![option.clone()]).with_weight(0.6);
    assert_eq!(unit.weighted_delta(&option), option.delta);
    assert!(scaled.weighted_delta(&option).is_zero());
}

// ── Goal gating ───────────────────────────────────────────────────────────

#[test]
fn questions_for_goals_keeps_ungated_and_matching() {
    let catalog = QuestionCatalog::from_json(CATALOG_JSON).unwrap();

    let none: Vec<&str> = catalog
        .questions_for_goals(&[])
        .iter()
        .map(|q| q.id.as_str())
        .collect();
    assert_eq!(none, vec!["temperature", "skin_moisture"]);

    let with_hormones: Vec<&str> = catalog
        .questions_for_goals(&[Goal::new("sleep"), Goal::new("hormones")])
        .iter()
        .map(|q| q.id.as_str())
        .collect();
    assert_eq!(with_hormones, vec!["temperature", "skin_moisture", "cycle_comfort"]);
}

// ── Fingerprint ───────────────────────────────────────────────────────────

#[test]
fn fingerprint_is_stable_and_content_sensitive() {
    let a = QuestionCatalog::from_json(CATALOG_JSON).unwrap();
    let b = QuestionCatalog::from_json(&a.to_json().unwrap()).unwrap();
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    assert_eq!(a.fingerprint().unwrap().len(), 64);

    let mut questions = a.questions().to_vec();
    questions[0].weight = 2.0;
    let c = QuestionCatalog::from_questions(questions).unwrap();
    assert_ne!(a.fingerprint().unwrap(), c.fingerprint().unwrap());
}
