use serde::{Deserialize, Serialize};

/// A user-selected wellness goal (e.g. `"sleep"`, `"digestion"`).
///
/// Goals only gate which questions are asked; the core never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goal(String);

impl Goal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Goal {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
