pub mod dijkstra;
pub mod distance;
pub mod path;
pub mod traits;

pub use traits::{ShortestPathSolver, ShortestPathTree};
