//! The closed classification sets and their ordering rules.
//!
//! Identifier enums carry only their stable ids and ordering; labels and
//! nicknames live in [`display`].

pub mod display;
mod modifier;
mod primary_type;
mod quiz_flag;

pub use modifier::Modifier;
pub use primary_type::{EnergyTendency, PrimaryType, TemperatureTendency};
pub use quiz_flag::QuizFlag;
