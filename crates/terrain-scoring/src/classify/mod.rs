//! Vector → (PrimaryType, Modifier). Shared by full scoring and the pulse check-in.

pub mod modifier;
pub mod primary;

pub use modifier::ModifierCandidate;

use terrain_core::config::ClassificationConfig;
use terrain_core::taxonomy::{Modifier, PrimaryType};
use terrain_core::vector::TerrainVector;

/// The two classification outputs for one vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub primary_type: PrimaryType,
    pub modifier: Modifier,
}

/// Stateless classifier parameterized by thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerrainClassifier {
    config: ClassificationConfig,
}

impl TerrainClassifier {
    pub fn new(config: ClassificationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    pub fn classify(&self, vector: &TerrainVector) -> Classification {
        Classification {
            primary_type: self.primary_type(vector),
            modifier: self.modifier(vector),
        }
    }

    pub fn primary_type(&self, vector: &TerrainVector) -> PrimaryType {
        primary::classify(vector, &self.config)
    }

    pub fn modifier(&self, vector: &TerrainVector) -> Modifier {
        modifier::select(&modifier::candidates(vector, &self.config))
    }
}
