use std::time::{Duration, Instant};
use trade_path::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use trade_path::graph::generators::{generate_random, node_name};
use trade_path::graph::{DirectedGraph, Graph};

// Function to benchmark the solver on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &DirectedGraph<String, u32>, start: &String) -> trade_path::Result<Duration>
where
    A: ShortestPathAlgorithm<String, u32, DirectedGraph<String, u32>>
{
    println!("Running {} on graph with {} nodes...", name, graph.node_count());

    let timer = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, start)?;
    let duration = timer.elapsed();

    println!("  - Reached {} nodes in {:?}", result.costs.len(), duration);

    Ok(duration)
}

fn main() -> trade_path::Result<()> {
    env_logger::init();

    // Linear minimum selection is quadratic, so stay small
    let graph_sizes = vec![100, 500, 1_000, 2_000, 5_000];

    // Edge factor: average number of edges per node
    let edge_factor = 3.0;

    println!("=====================================================");
    println!("Benchmark: linear-scan Dijkstra");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let name = <Dijkstra as ShortestPathAlgorithm<String, u32, DirectedGraph<String, u32>>>::name(&dijkstra);
    let mut results = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random(size, edge_factor, 100, seed as u64)?;
        let start = node_name(0);

        println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let duration = benchmark_algorithm(name, &dijkstra, &graph, &start)?;
        results.push((size, graph.edge_count(), duration));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<12}", "Nodes", "Edges", "Time (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, duration) in &results {
        println!("{:<10} | {:<10} | {:<12.3}", size, edges, duration.as_secs_f64() * 1000.0);
    }

    Ok(())
}
