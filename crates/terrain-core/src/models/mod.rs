mod drift_result;
mod response;
mod scoring_result;

pub use drift_result::{DriftRecommendation, TerrainDriftResult};
pub use response::QuizResponse;
pub use scoring_result::ScoringResult;
