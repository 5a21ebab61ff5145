//! Question catalog: static reference data injected into the scoring engine.

mod goal;
mod question;
mod question_catalog;

pub use goal::Goal;
pub use question::{Question, QuizOption};
pub use question_catalog::QuestionCatalog;
