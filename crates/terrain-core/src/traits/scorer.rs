use crate::models::{QuizResponse, ScoringResult};
use crate::vector::TerrainVector;

/// Folds quiz answers into a classified terrain.
pub trait ITerrainScorer: Send + Sync {
    /// Score an ordered list of responses. Unresolvable responses contribute nothing.
    fn calculate_terrain(&self, responses: &[QuizResponse]) -> ScoringResult;

    /// Classify a raw vector without going through the catalog.
    fn calculate_from_vector(&self, vector: TerrainVector) -> ScoringResult;
}
