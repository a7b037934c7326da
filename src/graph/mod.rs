pub mod traits;
pub mod directed;
pub mod generators;
pub mod sample;

pub use traits::{Graph, NodeId, Weight};
pub use directed::{DirectedGraph, GraphBuilder};
