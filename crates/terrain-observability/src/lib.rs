//! # terrain-observability
//!
//! Subscriber setup and span macros shared by the scoring and drift engines.

pub mod tracing_setup;

pub use tracing_setup::init_tracing;
