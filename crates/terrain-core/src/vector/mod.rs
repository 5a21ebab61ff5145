//! The five-axis terrain vector and the per-option deltas folded into it.

mod axis;
mod delta;
mod terrain_vector;

pub use axis::Axis;
pub use delta::TerrainDelta;
pub use terrain_vector::TerrainVector;
