//! Span definitions per operation: scoring and drift detection.

/// Create a scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($response_count:expr, $catalog_fingerprint:expr) => {
        tracing::info_span!(
            "terrain.scoring",
            response_count = $response_count,
            catalog = %$catalog_fingerprint
        )
    };
}

/// Create a drift-check span.
#[macro_export]
macro_rules! drift_span {
    ($stored_type:expr, $stored_modifier:expr) => {
        tracing::info_span!(
            "terrain.drift",
            stored_type = ?$stored_type,
            stored_modifier = ?$stored_modifier
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "terrain.scoring";
    pub const DRIFT: &str = "terrain.drift";
}
