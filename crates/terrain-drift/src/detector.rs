//! DriftDetector: re-runs terrain classification on a pulse check-in and
//! diffs it against the stored profile.

use std::collections::HashMap;

use terrain_core::config::TerrainConfig;
use terrain_core::models::TerrainDriftResult;
use terrain_core::taxonomy::{Modifier, PrimaryType};
use terrain_core::vector::TerrainVector;
use terrain_observability::drift_span;
use terrain_scoring::TerrainClassifier;
use tracing::{debug, info, warn};

use crate::pulse::PulseCatalog;
use crate::summary;

/// Compares a pulse check-in against a stored classification.
///
/// Never mutates the stored profile; the caller decides what to do with the
/// returned [`TerrainDriftResult`].
#[derive(Debug, Clone, Default)]
pub struct DriftDetector {
    classifier: TerrainClassifier,
    pulse: PulseCatalog,
}

impl DriftDetector {
    /// Detector with default thresholds and the standard pulse questions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &TerrainConfig) -> Self {
        Self {
            classifier: TerrainClassifier::new(config.classification),
            pulse: PulseCatalog::standard(),
        }
    }

    pub fn with_pulse_catalog(mut self, pulse: PulseCatalog) -> Self {
        self.pulse = pulse;
        self
    }

    pub fn pulse_catalog(&self) -> &PulseCatalog {
        &self.pulse
    }

    /// Build the pulse vector: each answered pulse question overwrites its
    /// axis (clamped). Unanswered axes stay at zero; unknown ids are ignored.
    pub fn pulse_vector(&self, answers: &HashMap<String, i32>) -> TerrainVector {
        let mut vector = TerrainVector::zero();
        for question in self.pulse.questions() {
            if let Some(&score) = answers.get(&question.id) {
                vector.set(question.axis, score);
            }
        }

        for id in answers.keys() {
            if self.pulse.question(id).is_none() {
                debug!(question_id = %id, "ignoring answer to unknown pulse question");
            }
        }

        vector
    }

    /// Resolve selected option ids to scores. Unknown questions or options are dropped.
    pub fn resolve_selections(&self, selections: &HashMap<String, String>) -> HashMap<String, i32> {
        selections
            .iter()
            .filter_map(|(question_id, option_id)| {
                let resolved = self
                    .pulse
                    .question(question_id)
                    .and_then(|q| q.option(option_id));
                if resolved.is_none() {
                    debug!(
                        question_id = %question_id,
                        option_id = %option_id,
                        "skipping unresolved pulse selection"
                    );
                }
                resolved.map(|option| (question_id.clone(), option.score))
            })
            .collect()
    }

    /// Classify the pulse answers and compare against the stored ids.
    ///
    /// Absent or unparseable stored ids fall back to neutral-balanced / none,
    /// so a corrupted profile reports drift relative to that default rather
    /// than failing.
    pub fn detect(
        &self,
        answers: &HashMap<String, i32>,
        stored_type: Option<&str>,
        stored_modifier: Option<&str>,
    ) -> TerrainDriftResult {
        let span = drift_span!(stored_type, stored_modifier);
        let _guard = span.enter();

        let current_type = PrimaryType::parse_or_default(stored_type);
        let current_modifier = Modifier::parse_or_default(stored_modifier);
        if let Some(raw) = stored_type.filter(|raw| raw.parse::<PrimaryType>().is_err()) {
            warn!(stored_type = %raw, fallback = %current_type, "unrecognized stored primary type");
        }
        if let Some(raw) = stored_modifier.filter(|raw| raw.parse::<Modifier>().is_err()) {
            warn!(stored_modifier = %raw, fallback = %current_modifier, "unrecognized stored modifier");
        }

        let classification = self.classifier.classify(&self.pulse_vector(answers));
        let pulse_type = classification.primary_type;
        let pulse_modifier = classification.modifier;

        let type_changed = current_type != pulse_type;
        let modifier_changed = current_modifier != pulse_modifier;
        let recommendation = summary::recommendation(type_changed, modifier_changed);

        info!(
            current_type = %current_type,
            pulse_type = %pulse_type,
            current_modifier = %current_modifier,
            pulse_modifier = %pulse_modifier,
            recommendation = recommendation.as_str(),
            "pulse check-in compared"
        );

        TerrainDriftResult {
            current_type,
            current_modifier,
            pulse_type,
            pulse_modifier,
            has_drifted: type_changed || modifier_changed,
            drift_summary: summary::describe(type_changed, modifier_changed, pulse_modifier),
            recommendation,
        }
    }

    /// [`detect`](Self::detect) from selected option ids instead of raw scores.
    pub fn detect_selections(
        &self,
        selections: &HashMap<String, String>,
        stored_type: Option<&str>,
        stored_modifier: Option<&str>,
    ) -> TerrainDriftResult {
        self.detect(
            &self.resolve_selections(selections),
            stored_type,
            stored_modifier,
        )
    }
}
