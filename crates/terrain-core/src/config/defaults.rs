use crate::constants;

// Classification
pub const DEFAULT_PRIMARY_THRESHOLD: i32 = constants::PRIMARY_THRESHOLD;
pub const DEFAULT_INTENSITY_THRESHOLD: i32 = constants::INTENSITY_THRESHOLD;
pub const DEFAULT_MOISTURE_THRESHOLD: i32 = constants::MOISTURE_THRESHOLD;

// Scoring
pub const DEFAULT_WARN_ON_SKIPPED_RESPONSES: bool = true;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
