use std::collections::HashSet;

use indexmap::IndexMap;
use log::warn;

use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Best known cost from the source, in discovery order.
    /// The source itself is never stored here.
    pub costs: IndexMap<N, W>,

    /// Predecessor of each reached node in the shortest path tree
    pub predecessors: IndexMap<N, N>,

    /// Source node
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Cost of the cheapest route to `node`; zero for the source, `None` when unreached
    pub fn cost_to(&self, node: &N) -> Option<W> {
        if *node == self.source {
            return Some(W::zero());
        }
        self.costs.get(node).copied()
    }

    /// Returns true if `node` is the source or has a recorded cost
    pub fn is_reached(&self, node: &N) -> bool {
        *node == self.source || self.costs.contains_key(node)
    }

    /// Rebuilds the path from the source to `target` by walking predecessors backwards.
    ///
    /// Returns `Ok(None)` when the target was never reached. A predecessor
    /// chain that loops or dead-ends before the source is reported as an error.
    pub fn path_to(&self, target: &N) -> Result<Option<Vec<N>>> {
        if !self.is_reached(target) {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = target.clone();
        let mut visited = HashSet::new();

        while current != self.source {
            if !visited.insert(current.clone()) {
                warn!("Cycle detected in path reconstruction at node {}", current);
                return Err(Error::PathCycle(current.to_string()));
            }

            let pred = match self.predecessors.get(&current) {
                Some(pred) => pred.clone(),
                None => return Err(Error::BrokenPredecessorChain(current.to_string())),
            };
            path.push(current);
            current = pred;
        }

        path.push(self.source.clone());
        path.reverse();

        Ok(Some(path))
    }

    /// Sums edge weights along `path` in `graph`; `None` if a hop has no edge.
    ///
    /// Fails with [`Error::CostOverflow`] when the sum does not fit in `W`.
    pub fn path_cost<G>(&self, graph: &G, path: &[N]) -> Result<Option<W>>
    where
        G: Graph<N, W>,
    {
        let mut total = W::zero();
        for hop in path.windows(2) {
            match graph.edge_weight(&hop[0], &hop[1])? {
                Some(weight) => {
                    total = total.checked_add(weight).ok_or_else(|| Error::CostOverflow {
                        from: hop[0].to_string(),
                        to: hop[1].to_string(),
                    })?;
                }
                None => return Ok(None),
            }
        }
        Ok(Some(total))
    }
}

/// Outcome of a solve that names an end node
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// The end node (if any) was reached; carries the full tables
    Reached(ShortestPathResult<N, W>),

    /// The end node has no route from the start
    NoPath { start: N, end: N },
}

impl<N, W> Solution<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub fn is_reached(&self) -> bool {
        matches!(self, Solution::Reached(_))
    }

    /// The tables, when a route exists
    pub fn result(&self) -> Option<&ShortestPathResult<N, W>> {
        match self {
            Solution::Reached(result) => Some(result),
            Solution::NoPath { .. } => None,
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a start node to all reachable nodes
    fn compute_shortest_paths(&self, graph: &G, start: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Solves from `start`, optionally checking that `end` is reachable.
    ///
    /// Unknown start or end nodes are errors. An unreachable end is not:
    /// it yields [`Solution::NoPath`] instead of the tables.
    fn solve(&self, graph: &G, start: &N, end: Option<&N>) -> Result<Solution<N, W>> {
        if let Some(end) = end {
            if !graph.contains(end) {
                return Err(Error::UnknownNode(end.to_string()));
            }
        }

        let result = self.compute_shortest_paths(graph, start)?;

        match end {
            Some(end) if !result.is_reached(end) => Ok(Solution::NoPath {
                start: start.clone(),
                end: end.clone(),
            }),
            _ => Ok(Solution::Reached(result)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn result_with(predecessors: &[(&'static str, &'static str)]) -> ShortestPathResult<&'static str, u32> {
        ShortestPathResult {
            costs: predecessors.iter().map(|(node, _)| (*node, 1)).collect(),
            predecessors: predecessors.iter().copied().collect(),
            source: "s",
        }
    }

    #[test]
    fn test_path_to_source_is_trivial() {
        let result = result_with(&[]);
        assert_eq!(result.path_to(&"s"), Ok(Some(vec!["s"])));
        assert_eq!(result.cost_to(&"s"), Some(0));
    }

    #[test]
    fn test_path_to_unreached_is_none() {
        let result = result_with(&[("a", "s")]);
        assert_eq!(result.path_to(&"b"), Ok(None));
        assert_eq!(result.cost_to(&"b"), None);
    }

    #[test]
    fn test_cycle_in_predecessors_is_reported() {
        let result = result_with(&[("a", "b"), ("b", "a")]);
        assert_eq!(result.path_to(&"a"), Err(Error::PathCycle("a".to_string())));
    }

    #[test]
    fn test_path_cost_overflow_is_reported() {
        let graph = DirectedGraph::from_edges([("s", "a", u32::MAX), ("a", "b", 1)]).unwrap();
        let result = result_with(&[("a", "s"), ("b", "a")]);

        assert_eq!(result.path_cost(&graph, &["s", "a"]), Ok(Some(u32::MAX)));
        assert_eq!(
            result.path_cost(&graph, &["s", "a", "b"]),
            Err(Error::CostOverflow {
                from: "a".to_string(),
                to: "b".to_string(),
            })
        );
    }

    #[test]
    fn test_dead_end_predecessor_chain_is_reported() {
        let mut result = result_with(&[("a", "b")]);
        result.costs.insert("b", 1);
        assert_eq!(
            result.path_to(&"a"),
            Err(Error::BrokenPredecessorChain("b".to_string()))
        );
    }
}
