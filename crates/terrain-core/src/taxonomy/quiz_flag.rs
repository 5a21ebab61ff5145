use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::TerrainError;

/// Boolean symptom signals copied verbatim from selected options.
/// Independent of the numeric vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuizFlag {
    Reflux,
    LooseStool,
    Constipation,
    NightSweats,
    ColdExtremities,
}

impl QuizFlag {
    pub const ALL: [QuizFlag; 5] = [
        QuizFlag::Reflux,
        QuizFlag::LooseStool,
        QuizFlag::Constipation,
        QuizFlag::NightSweats,
        QuizFlag::ColdExtremities,
    ];

    pub fn id(self) -> &'static str {
        match self {
            QuizFlag::Reflux => "reflux",
            QuizFlag::LooseStool => "loose_stool",
            QuizFlag::Constipation => "constipation",
            QuizFlag::NightSweats => "night_sweats",
            QuizFlag::ColdExtremities => "cold_extremities",
        }
    }
}

impl FromStr for QuizFlag {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuizFlag::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| TerrainError::UnknownQuizFlag { id: s.to_string() })
    }
}
