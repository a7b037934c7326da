pub mod traits;
pub mod selection;
pub mod dijkstra;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult, Solution};
