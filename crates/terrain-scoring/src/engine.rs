//! ScoringEngine: implements ITerrainScorer, folds responses into a vector and classifies it.

use std::collections::BTreeSet;

use rayon::prelude::*;
use terrain_core::config::{ScoringConfig, TerrainConfig};
use terrain_core::models::{QuizResponse, ScoringResult};
use terrain_core::taxonomy::QuizFlag;
use terrain_core::traits::{IQuestionCatalog, ITerrainScorer};
use terrain_core::vector::TerrainVector;
use terrain_observability::scoring_span;
use tracing::{debug, info, warn};

use crate::classify::TerrainClassifier;

/// A scoring pass: the result plus the responses that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringPass {
    pub result: ScoringResult,
    /// Responses whose question or option id was not in the catalog.
    pub skipped: Vec<QuizResponse>,
}

/// The scoring engine. Holds no per-call state; share it freely across threads.
pub struct ScoringEngine<'a> {
    catalog: &'a dyn IQuestionCatalog,
    classifier: TerrainClassifier,
    config: ScoringConfig,
    /// Catalog fingerprint recorded on each scoring span.
    catalog_label: String,
}

impl<'a> ScoringEngine<'a> {
    /// Engine with default thresholds.
    pub fn new(catalog: &'a dyn IQuestionCatalog) -> Self {
        Self::with_config(catalog, &TerrainConfig::default())
    }

    pub fn with_config(catalog: &'a dyn IQuestionCatalog, config: &TerrainConfig) -> Self {
        Self {
            catalog,
            classifier: TerrainClassifier::new(config.classification),
            config: config.scoring.clone(),
            catalog_label: format!("{} questions", catalog.questions().len()),
        }
    }

    /// Label the scoring span with a catalog revision, e.g. `QuestionCatalog::fingerprint`.
    pub fn with_catalog_label(mut self, label: impl Into<String>) -> Self {
        self.catalog_label = label.into();
        self
    }

    pub fn classifier(&self) -> &TerrainClassifier {
        &self.classifier
    }

    /// Fold responses in order, then classify.
    ///
    /// A response whose question or option is not in the catalog is skipped
    /// and contributes nothing. Flags from every matched option are unioned.
    pub fn score(&self, responses: &[QuizResponse]) -> ScoringPass {
        let span = scoring_span!(responses.len(), self.catalog_label);
        let _guard = span.enter();

        let mut vector = TerrainVector::zero();
        let mut flags = BTreeSet::new();
        let mut skipped = Vec::new();

        for response in responses {
            let resolved = self.catalog.question(&response.question_id).and_then(|question| {
                question
                    .option(&response.option_id)
                    .map(|option| (question, option))
            });

            let Some((question, option)) = resolved else {
                if self.config.warn_on_skipped_responses {
                    warn!(
                        question_id = %response.question_id,
                        option_id = %response.option_id,
                        "skipping unresolved quiz response"
                    );
                } else {
                    debug!(
                        question_id = %response.question_id,
                        option_id = %response.option_id,
                        "skipping unresolved quiz response"
                    );
                }
                skipped.push(response.clone());
                continue;
            };

            vector.add_delta(&question.weighted_delta(option));
            flags.extend(option.flags.iter().copied());
        }

        let result = self.classify(vector, flags);
        info!(
            terrain_profile_id = result.terrain_profile_id(),
            modifier = %result.modifier,
            skipped = skipped.len(),
            "terrain scored"
        );

        ScoringPass { result, skipped }
    }

    /// Score independent submissions in parallel. Output order matches input.
    pub fn calculate_batch(&self, submissions: &[Vec<QuizResponse>]) -> Vec<ScoringResult> {
        submissions
            .par_iter()
            .map(|responses| self.calculate_terrain(responses))
            .collect()
    }

    fn classify(&self, vector: TerrainVector, flags: BTreeSet<QuizFlag>) -> ScoringResult {
        let classification = self.classifier.classify(&vector);
        ScoringResult {
            vector,
            primary_type: classification.primary_type,
            modifier: classification.modifier,
            flags,
        }
    }
}

impl ITerrainScorer for ScoringEngine<'_> {
    fn calculate_terrain(&self, responses: &[QuizResponse]) -> ScoringResult {
        self.score(responses).result
    }

    fn calculate_from_vector(&self, vector: TerrainVector) -> ScoringResult {
        self.classify(vector, BTreeSet::new())
    }
}
