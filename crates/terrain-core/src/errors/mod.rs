mod catalog_error;
mod terrain_error;

pub use catalog_error::CatalogError;
pub use terrain_error::{TerrainError, TerrainResult};
