//! # terrain-drift
//!
//! Short pulse check-in: five single-answer questions, one per axis, build a
//! vector directly (no accumulation), which goes through the same classifier
//! as the full quiz and is compared against the stored terrain.
//! Stored ids that fail to parse degrade to neutral-balanced / none.

pub mod detector;
pub mod pulse;
pub mod summary;

pub use detector::DriftDetector;
pub use pulse::{PulseCatalog, PulseOption, PulseQuestion};
