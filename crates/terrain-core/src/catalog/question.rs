use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Goal;
use crate::constants::DEFAULT_QUESTION_WEIGHT;
use crate::taxonomy::QuizFlag;
use crate::vector::TerrainDelta;

fn default_weight() -> f64 {
    DEFAULT_QUESTION_WEIGHT
}

/// One answer choice: its delta and the flags it raises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    #[serde(default)]
    pub delta: TerrainDelta,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub flags: BTreeSet<QuizFlag>,
}

impl QuizOption {
    pub fn new(id: impl Into<String>, delta: TerrainDelta) -> Self {
        Self {
            id: id.into(),
            delta,
            flags: BTreeSet::new(),
        }
    }

    pub fn with_flags(mut self, flags: impl IntoIterator<Item = QuizFlag>) -> Self {
        self.flags.extend(flags);
        self
    }
}

/// A quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub options: Vec<QuizOption>,
    /// Per-axis multiplier applied to the selected option's delta.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// When set, the question is only asked if the user picked this goal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_requirement: Option<Goal>,
}

impl Question {
    pub fn new(id: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            id: id.into(),
            options,
            weight: DEFAULT_QUESTION_WEIGHT,
            goal_requirement: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_goal_requirement(mut self, goal: impl Into<Goal>) -> Self {
        self.goal_requirement = Some(goal.into());
        self
    }

    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// The option's delta after this question's weight is applied.
    /// Unit-weight questions pass the delta through untouched.
    pub fn weighted_delta(&self, option: &QuizOption) -> TerrainDelta {
        if self.weight == DEFAULT_QUESTION_WEIGHT {
            option.delta
        } else {
            option.delta.weighted(self.weight)
        }
    }

    /// Whether this question is asked for the given goal set.
    pub fn is_asked_for<'a>(&self, goals: impl IntoIterator<Item = &'a Goal>) -> bool {
        match &self.goal_requirement {
            None => true,
            Some(required) => goals.into_iter().any(|g| g == required),
        }
    }
}
