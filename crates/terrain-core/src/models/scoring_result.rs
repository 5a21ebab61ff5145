use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::taxonomy::{Modifier, PrimaryType, QuizFlag};
use crate::vector::TerrainVector;

/// Output of a scoring pass. This is what the storage layer persists and
/// what content services key off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    pub vector: TerrainVector,
    pub primary_type: PrimaryType,
    pub modifier: Modifier,
    /// Union of flags from every matched option.
    pub flags: BTreeSet<QuizFlag>,
}

impl ScoringResult {
    /// Foreign key used by downstream content tables; equal to the primary type id.
    pub fn terrain_profile_id(&self) -> &'static str {
        self.primary_type.id()
    }

    pub fn has_flag(&self, flag: QuizFlag) -> bool {
        self.flags.contains(&flag)
    }
}
