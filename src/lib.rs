//! Trade Path - Dijkstra's shortest path over a small trading graph
//!
//! Models "trading up" a book for a piano: every node is an item, every
//! directed edge says how much has to be paid on top to swap one item for
//! another. The solver is the textbook Dijkstra relaxation loop with a
//! linear scan for the cheapest unsettled node, which is plenty for graphs
//! of a handful of items.
//!
//! ```
//! use trade_path::{sample_graph, Dijkstra, Item, ShortestPathAlgorithm, Solution};
//!
//! let graph = sample_graph().unwrap();
//! let solution = Dijkstra::new()
//!     .solve(&graph, &Item::Book, Some(&Item::Piano))
//!     .unwrap();
//!
//! match solution {
//!     Solution::Reached(result) => assert_eq!(result.cost_to(&Item::Piano), Some(35)),
//!     Solution::NoPath { .. } => unreachable!(),
//! }
//! ```

pub mod algorithm;
pub mod config;
pub mod graph;
pub mod report;

pub use algorithm::{
    dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult, Solution,
};
/// Re-export main types for convenient use
pub use graph::directed::{DirectedGraph, GraphBuilder};
pub use graph::sample::{sample_graph, Item};
pub use graph::{Graph, NodeId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Cost overflow on edge from {from} to {to}")]
    CostOverflow { from: String, to: String },

    #[error("Cycle detected in predecessor chain at node {0}")]
    PathCycle(String),

    #[error("Predecessor chain broken at node {0}")]
    BrokenPredecessorChain(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to write report: {0}")]
    Output(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
