//! The five pulse questions. Each is bound to one axis; the selected
//! option's score is written straight onto that axis.

use serde::{Deserialize, Serialize};
use terrain_core::vector::Axis;

pub const PULSE_COLD_HEAT: &str = "pulse_cold_heat";
pub const PULSE_DEF_EXCESS: &str = "pulse_def_excess";
pub const PULSE_DAMP_DRY: &str = "pulse_damp_dry";
pub const PULSE_QI_STAGNATION: &str = "pulse_qi_stagnation";
pub const PULSE_SHEN_UNSETTLED: &str = "pulse_shen_unsettled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseOption {
    pub id: String,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseQuestion {
    pub id: String,
    pub axis: Axis,
    pub options: Vec<PulseOption>,
}

impl PulseQuestion {
    fn new(id: &str, axis: Axis, options: &[(&str, i32)]) -> Self {
        Self {
            id: id.to_string(),
            axis,
            options: options
                .iter()
                .map(|&(id, score)| PulseOption {
                    id: id.to_string(),
                    score,
                })
                .collect(),
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&PulseOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// The pulse question set, disjoint from the full quiz catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseCatalog {
    questions: Vec<PulseQuestion>,
}

impl PulseCatalog {
    /// The standard five-question check-in.
    pub fn standard() -> Self {
        Self {
            questions: vec![
                PulseQuestion::new(
                    PULSE_COLD_HEAT,
                    Axis::ColdHeat,
                    &[
                        ("feeling_cold", -5),
                        ("slightly_cool", -2),
                        ("comfortable", 0),
                        ("slightly_warm", 3),
                        ("feeling_hot", 5),
                    ],
                ),
                PulseQuestion::new(
                    PULSE_DEF_EXCESS,
                    Axis::DefExcess,
                    &[
                        ("drained", -5),
                        ("a_bit_tired", -2),
                        ("steady", 0),
                        ("energized", 2),
                        ("wired", 5),
                    ],
                ),
                PulseQuestion::new(
                    PULSE_DAMP_DRY,
                    Axis::DampDry,
                    &[
                        ("heavy_puffy", -5),
                        ("a_bit_sluggish", -2),
                        ("normal", 0),
                        ("a_bit_dry", 2),
                        ("parched", 5),
                    ],
                ),
                PulseQuestion::new(
                    PULSE_QI_STAGNATION,
                    Axis::QiStagnation,
                    &[
                        ("relaxed", 0),
                        ("mostly_easy", 1),
                        ("some_tension", 3),
                        ("tense", 5),
                        ("very_stuck", 8),
                    ],
                ),
                PulseQuestion::new(
                    PULSE_SHEN_UNSETTLED,
                    Axis::ShenUnsettled,
                    &[
                        ("sleeping_well", 0),
                        ("mostly_rested", 1),
                        ("restless", 3),
                        ("poor_sleep", 5),
                        ("very_unsettled", 8),
                    ],
                ),
            ],
        }
    }

    pub fn from_questions(questions: Vec<PulseQuestion>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[PulseQuestion] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&PulseQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }
}

impl Default for PulseCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
