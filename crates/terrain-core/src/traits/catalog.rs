use crate::catalog::{Goal, Question};

/// Read-only question lookup injected into the scoring engine.
///
/// Implementations must not change while a scoring pass is in flight.
pub trait IQuestionCatalog: Send + Sync {
    /// Look up a question by id.
    fn question(&self, id: &str) -> Option<&Question>;

    /// All questions in display order.
    fn questions(&self) -> &[Question];

    /// Ungated questions plus those whose goal requirement is in `goals`,
    /// in display order.
    fn questions_for_goals(&self, goals: &[Goal]) -> Vec<&Question> {
        self.questions()
            .iter()
            .filter(|q| q.is_asked_for(goals))
            .collect()
    }
}
