use serde::{Deserialize, Serialize};

/// One answered question: which option the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizResponse {
    pub question_id: String,
    pub option_id: String,
}

impl QuizResponse {
    pub fn new(question_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            option_id: option_id.into(),
        }
    }
}

impl From<(&str, &str)> for QuizResponse {
    fn from((question_id, option_id): (&str, &str)) -> Self {
        Self::new(question_id, option_id)
    }
}
