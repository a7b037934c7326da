use std::env;
use std::io;
use std::process::ExitCode;

use log::error;
use trade_path::config::{OutputFormat, RunConfig};
use trade_path::report::{JsonSink, ResultSink, SolveReport, TextSink};
use trade_path::{sample_graph, Dijkstra, Graph, ShortestPathAlgorithm};

fn run(config: &RunConfig) -> trade_path::Result<()> {
    let graph = sample_graph()?;
    log::info!(
        "Loaded trading graph with {} items and {} trades",
        graph.node_count(),
        graph.edge_count()
    );

    let dijkstra = Dijkstra::new();
    let solution = dijkstra.solve(&graph, &config.start, config.end.as_ref())?;
    let report = SolveReport::from_solution("Dijkstra", &solution, &config.start, config.end.as_ref())?;

    let stdout = io::stdout().lock();
    match config.format {
        OutputFormat::Text => TextSink::new(stdout).emit(&report),
        OutputFormat::Json => JsonSink::new(stdout).emit(&report),
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let result = RunConfig::from_args(env::args().skip(1)).and_then(|config| run(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
