//! # terrain-scoring
//!
//! Folds quiz answers into a [`TerrainVector`](terrain_core::TerrainVector)
//! and classifies it.
//! Primary type: two axis tendencies (±3 thresholds) through a 3×3 table,
//! cold × excess folded into cold × balanced.
//! Modifier: shen / stagnation / damp-or-dry candidates, largest magnitude
//! wins, exact ties go to shen, then stagnation, then moisture.

pub mod classify;
pub mod engine;

pub use classify::{Classification, ModifierCandidate, TerrainClassifier};
pub use engine::{ScoringEngine, ScoringPass};
