use crate::graph::{DirectedGraph, GraphBuilder};
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Name of the i-th generated node
pub fn node_name(i: usize) -> String {
    format!("n{}", i)
}

/// Generates a random directed graph with `n` nodes named `n0..n{n-1}`.
///
/// Roughly `edge_factor * n` edges are drawn with integer weights in
/// `0..=max_weight`; self-loops are skipped. The same seed always yields the
/// same graph, node order included.
pub fn generate_random(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    seed: u64,
) -> Result<DirectedGraph<String, u32>> {
    let mut builder = GraphBuilder::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        builder.add_node(node_name(i));
    }

    if n > 1 {
        let num_edges = (edge_factor * n as f64) as usize;
        for _ in 0..num_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                let weight = rng.gen_range(0..=max_weight);
                builder.add_edge(node_name(u), node_name(v), weight);
            }
        }
    }

    builder.build()
}

/// Generates a `width * height` grid where every cell links to its right
/// and lower neighbor with weight 1. Cells are named `r{row}c{col}`.
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<String, u32>> {
    let mut builder = GraphBuilder::new();
    let cell = |row: usize, col: usize| format!("r{}c{}", row, col);

    for row in 0..height {
        for col in 0..width {
            builder.add_node(cell(row, col));
            if col + 1 < width {
                builder.add_edge(cell(row, col), cell(row, col + 1), 1);
            }
            if row + 1 < height {
                builder.add_edge(cell(row, col), cell(row + 1, col), 1);
            }
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_random_graph_is_reproducible() {
        let a = generate_random(50, 3.0, 20, 7).unwrap();
        let b = generate_random(50, 3.0, 20, 7).unwrap();

        let a_nodes: Vec<_> = a.nodes().collect();
        let b_nodes: Vec<_> = b.nodes().collect();
        assert_eq!(a_nodes, b_nodes);
        assert_eq!(a_nodes[0], "n0");
        assert_eq!(a_nodes[49], "n49");

        let a_edges: Vec<_> = a.edges().collect();
        let b_edges: Vec<_> = b.edges().collect();
        assert_eq!(a_edges, b_edges);
        assert_eq!(a.node_count(), 50);
        assert!(a.edges().all(|(from, to, w)| from != to && w <= 20));
    }

    #[test]
    fn test_grid_shape() {
        let grid = generate_grid(3, 2).unwrap();

        assert_eq!(grid.node_count(), 6);
        // 2 rows * 2 horizontal + 3 columns * 1 vertical
        assert_eq!(grid.edge_count(), 7);
        assert_eq!(grid.has_edge(&"r0c0".to_string(), &"r1c0".to_string()), Ok(true));
        assert!(grid.neighbors(&"r1c2".to_string()).unwrap().is_empty());
    }
}
