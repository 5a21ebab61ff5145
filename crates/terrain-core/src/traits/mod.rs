mod catalog;
mod scorer;

pub use catalog::IQuestionCatalog;
pub use scorer::ITerrainScorer;
