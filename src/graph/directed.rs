use crate::graph::traits::{Graph, NodeId, Weight};
use crate::{Error, Result};
use indexmap::IndexMap;
use log::debug;

/// An immutable directed graph stored as nested adjacency maps.
///
/// Both the outer map and every neighbor map keep insertion order, so
/// iterating a graph always visits nodes and edges in the order they were
/// declared. The solver relies on that for reproducible tie-breaks.
///
/// `PartialEq` compares contents only: two graphs with the same edges
/// declared in a different order are equal. Compare `nodes()` / `edges()`
/// sequences when order matters.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Outgoing edges for each node: node -> {neighbor -> weight}
    adjacency: IndexMap<N, IndexMap<N, W>>,

    /// Number of distinct edges
    edge_count: usize,
}

impl<N, W> DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Starts an empty builder
    pub fn builder() -> GraphBuilder<N, W> {
        GraphBuilder::new()
    }

    /// Builds a graph from a list of `(source, target, weight)` edges.
    ///
    /// Every node named on either side of an edge gets an entry, terminal
    /// nodes included. A repeated edge keeps the last weight given.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut builder = GraphBuilder::new();
        for (from, to, weight) in edges {
            builder.add_edge(from, to, weight);
        }
        builder.build()
    }

    /// Iterates over every edge as `(source, target, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, W)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |(to, w)| (from, to, *w)))
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> Result<&IndexMap<N, W>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| Error::UnknownNode(node.to_string()))
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.adjacency.keys())
    }
}

/// Collects nodes and edges before freezing them into a [`DirectedGraph`].
///
/// The builder is the only place edges can be added; `build` consumes it.
#[derive(Debug, Clone)]
pub struct GraphBuilder<N, W>
where
    N: NodeId,
    W: Weight,
{
    adjacency: IndexMap<N, IndexMap<N, W>>,
}

impl<N, W> Default for GraphBuilder<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> GraphBuilder<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty builder
    pub fn new() -> Self {
        GraphBuilder {
            adjacency: IndexMap::new(),
        }
    }

    /// Adds a node without edges. Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.adjacency.entry(node).or_default();
        self
    }

    /// Adds a directed edge, registering both endpoints.
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> &mut Self {
        self.adjacency
            .entry(from)
            .or_default()
            .insert(to.clone(), weight);
        self.add_node(to)
    }

    /// Validates the edge weights and freezes the graph.
    ///
    /// Fails with [`Error::NegativeWeight`] on the first weight that is not
    /// `>= 0` (this also catches NaN for float weights).
    pub fn build(self) -> Result<DirectedGraph<N, W>> {
        let mut edge_count = 0;
        for (from, targets) in &self.adjacency {
            for (to, weight) in targets {
                if !(*weight >= W::zero()) {
                    return Err(Error::NegativeWeight {
                        from: from.to_string(),
                        to: to.to_string(),
                        weight: weight.to_string(),
                    });
                }
                edge_count += 1;
            }
        }

        debug!(
            "Built graph with {} nodes and {} edges",
            self.adjacency.len(),
            edge_count
        );

        Ok(DirectedGraph {
            adjacency: self.adjacency,
            edge_count,
        })
    }
}
