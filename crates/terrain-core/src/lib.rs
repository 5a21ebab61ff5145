//! # terrain-core
//!
//! Foundation crate for the terrain scoring model.
//! Defines the five-axis vector, the classification taxonomy, the question
//! catalog, exposed result models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod taxonomy;
pub mod traits;
pub mod vector;

// Re-export the most commonly used types at the crate root.
pub use catalog::{Goal, Question, QuestionCatalog, QuizOption};
pub use config::TerrainConfig;
pub use errors::{TerrainError, TerrainResult};
pub use models::{DriftRecommendation, QuizResponse, ScoringResult, TerrainDriftResult};
pub use taxonomy::{Modifier, PrimaryType, QuizFlag};
pub use vector::{Axis, TerrainDelta, TerrainVector};
