use indexmap::{IndexMap, IndexSet};
use log::{debug, info, trace};

use crate::algorithm::selection::find_lowest_cost;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a linear scan for the next node to settle.
///
/// Each step costs O(n), which is fine for the small graphs this crate is
/// meant for. The scan order is the cost table's insertion order, so ties
/// are broken in favor of the node discovered first.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, start: &N) -> Result<ShortestPathResult<N, W>> {
        if !graph.contains(start) {
            return Err(Error::UnknownNode(start.to_string()));
        }

        let mut costs: IndexMap<N, W> = IndexMap::new();
        let mut predecessors: IndexMap<N, N> = IndexMap::new();
        let mut processed: IndexSet<N> = IndexSet::new();

        // The start is settled at zero; its neighbors form the first frontier.
        for (neighbor, &weight) in graph.neighbors(start)? {
            if neighbor == start {
                continue;
            }
            costs.insert(neighbor.clone(), weight);
            predecessors.insert(neighbor.clone(), start.clone());
        }

        let to_settle = graph.node_count().saturating_sub(1);

        while processed.len() < to_settle {
            let node = match find_lowest_cost(&costs, &processed) {
                Some(node) => node,
                None => {
                    debug!(
                        "Frontier exhausted after settling {} of {} nodes",
                        processed.len(),
                        to_settle
                    );
                    break;
                }
            };
            let node_cost = costs[&node];
            debug!("Settling {} at cost {}", node, node_cost);

            for (neighbor, &weight) in graph.neighbors(&node)? {
                if neighbor == start {
                    continue;
                }
                let cost_through_node = node_cost.checked_add(weight).ok_or_else(|| Error::CostOverflow {
                    from: node.to_string(),
                    to: neighbor.to_string(),
                })?;

                match costs.get(neighbor).copied() {
                    None => {
                        trace!("Discovered {} via {} at {}", neighbor, node, cost_through_node);
                        costs.insert(neighbor.clone(), cost_through_node);
                        predecessors.insert(neighbor.clone(), node.clone());
                    }
                    Some(current) if !processed.contains(&node) && cost_through_node < current => {
                        trace!(
                            "Relaxed {} via {}: {} -> {}",
                            neighbor,
                            node,
                            current,
                            cost_through_node
                        );
                        costs.insert(neighbor.clone(), cost_through_node);
                        predecessors.insert(neighbor.clone(), node.clone());
                    }
                    Some(_) => {}
                }
            }

            processed.insert(node);
        }

        info!(
            "Solved from {}: {} of {} other nodes reached",
            start,
            costs.len(),
            to_settle
        );

        Ok(ShortestPathResult {
            costs,
            predecessors,
            source: start.clone(),
        })
    }
}
