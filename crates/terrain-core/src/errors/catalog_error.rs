/// Question catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse {format} catalog: {reason}")]
    Parse { format: String, reason: String },

    #[error("failed to read catalog at {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("question {question_id} has invalid weight {weight}")]
    InvalidWeight { question_id: String, weight: f64 },
}
