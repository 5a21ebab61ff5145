use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Question;
use crate::errors::{CatalogError, TerrainResult};
use crate::traits::IQuestionCatalog;

/// On-disk shape of a catalog document.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    questions: Vec<Question>,
}

/// An immutable, ordered question catalog with an id index.
///
/// Built once and shared by reference; the scoring engine never mutates it.
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
}

impl QuestionCatalog {
    /// Build a catalog from questions in display order.
    ///
    /// Rejects weights that are NaN, infinite or negative. If two questions
    /// share an id, lookups resolve to the first.
    pub fn from_questions(questions: Vec<Question>) -> TerrainResult<Self> {
        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if !question.weight.is_finite() || question.weight < 0.0 {
                return Err(CatalogError::InvalidWeight {
                    question_id: question.id.clone(),
                    weight: question.weight,
                }
                .into());
            }
            index.entry(question.id.clone()).or_insert(position);
        }
        Ok(Self { questions, index })
    }

    /// Parse a JSON document of the form `{"questions": [...]}`.
    pub fn from_json(source: &str) -> TerrainResult<Self> {
        let doc: CatalogDocument =
            serde_json::from_str(source).map_err(|e| CatalogError::Parse {
                format: "json".to_string(),
                reason: e.to_string(),
            })?;
        Self::from_questions(doc.questions)
    }

    /// Parse a TOML document with a `[[questions]]` array.
    pub fn from_toml(source: &str) -> TerrainResult<Self> {
        let doc: CatalogDocument = toml::from_str(source).map_err(|e| CatalogError::Parse {
            format: "toml".to_string(),
            reason: e.to_string(),
        })?;
        Self::from_questions(doc.questions)
    }

    /// Load a catalog file, choosing the parser by extension (`.toml`, else JSON).
    pub fn load(path: &Path) -> TerrainResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&source),
            _ => Self::from_json(&source),
        }
    }

    /// Serialize back to the JSON document shape.
    pub fn to_json(&self) -> TerrainResult<String> {
        let doc = CatalogDocument {
            questions: self.questions.clone(),
        };
        Ok(serde_json::to_string(&doc)?)
    }

    /// blake3 hex digest of the canonical JSON, identifying this catalog revision.
    pub fn fingerprint(&self) -> TerrainResult<String> {
        let serialized = serde_json::to_string(&self.questions)?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl IQuestionCatalog for QuestionCatalog {
    fn question(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&position| &self.questions[position])
    }

    fn questions(&self) -> &[Question] {
        &self.questions
    }
}
