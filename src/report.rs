//! Rendering of solve results for display.
//!
//! A [`SolveReport`] is a flat, serializable snapshot of a [`Solution`]
//! with node identifiers turned into their display names. Sinks decide how
//! it is written: [`TextSink`] prints a table, [`JsonSink`] a JSON document.

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;

use crate::algorithm::Solution;
use crate::graph::{NodeId, Weight};
use crate::{Error, Result};

/// Serializable view of a solve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport<W>
where
    W: Weight + Serialize,
{
    pub algorithm: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub reached: bool,
    pub costs: IndexMap<String, W>,
    pub predecessors: IndexMap<String, String>,
    /// Route from start to end, when an end was requested and reached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<W>,
}

impl<W> SolveReport<W>
where
    W: Weight + Serialize,
{
    pub fn from_solution<N>(
        algorithm: &str,
        solution: &Solution<N, W>,
        start: &N,
        end: Option<&N>,
    ) -> Result<Self>
    where
        N: NodeId,
    {
        let mut report = SolveReport {
            algorithm: algorithm.to_string(),
            start: start.to_string(),
            end: end.map(|e| e.to_string()),
            reached: solution.is_reached(),
            costs: IndexMap::new(),
            predecessors: IndexMap::new(),
            path: None,
            total_cost: None,
        };

        if let Some(result) = solution.result() {
            report.costs = result
                .costs
                .iter()
                .map(|(node, cost)| (node.to_string(), *cost))
                .collect();
            report.predecessors = result
                .predecessors
                .iter()
                .map(|(node, pred)| (node.to_string(), pred.to_string()))
                .collect();

            if let Some(end) = end {
                report.path = result
                    .path_to(end)?
                    .map(|path| path.iter().map(|n| n.to_string()).collect());
                report.total_cost = result.cost_to(end);
            }
        }

        Ok(report)
    }
}

/// A destination for solve reports
pub trait ResultSink {
    fn emit<W>(&mut self, report: &SolveReport<W>) -> Result<()>
    where
        W: Weight + Serialize;
}

/// Writes a human readable table
#[derive(Debug)]
pub struct TextSink<O: Write> {
    out: O,
}

impl<O: Write> TextSink<O> {
    pub fn new(out: O) -> Self {
        TextSink { out }
    }

    pub fn into_inner(self) -> O {
        self.out
    }
}

impl<O: Write> ResultSink for TextSink<O> {
    fn emit<W>(&mut self, report: &SolveReport<W>) -> Result<()>
    where
        W: Weight + Serialize,
    {
        write_text(&mut self.out, report).map_err(|e| Error::Output(e.to_string()))
    }
}

fn write_text<O, W>(out: &mut O, report: &SolveReport<W>) -> std::io::Result<()>
where
    O: Write,
    W: Weight + Serialize,
{
    match &report.end {
        Some(end) => writeln!(out, "{} from {} to {}", report.algorithm, report.start, end)?,
        None => writeln!(out, "{} from {}", report.algorithm, report.start)?,
    }

    if !report.reached {
        if let Some(end) = &report.end {
            writeln!(out, "No path from {} to {}", report.start, end)?;
        }
        return Ok(());
    }

    let width = report
        .costs
        .keys()
        .map(|n| n.len())
        .chain(std::iter::once("node".len()))
        .max()
        .unwrap_or(0);

    writeln!(out, "  {:<width$}  {:>6}  via", "node", "cost", width = width)?;
    for (node, cost) in &report.costs {
        let via = report.predecessors.get(node).map(String::as_str).unwrap_or("-");
        writeln!(out, "  {:<width$}  {:>6}  {}", node, cost.to_string(), via, width = width)?;
    }

    if let (Some(path), Some(total)) = (&report.path, report.total_cost) {
        writeln!(out, "Path: {} (cost {})", path.join(" -> "), total)?;
    }

    Ok(())
}

/// Writes the report as pretty-printed JSON followed by a newline
#[derive(Debug)]
pub struct JsonSink<O: Write> {
    out: O,
}

impl<O: Write> JsonSink<O> {
    pub fn new(out: O) -> Self {
        JsonSink { out }
    }

    pub fn into_inner(self) -> O {
        self.out
    }
}

impl<O: Write> ResultSink for JsonSink<O> {
    fn emit<W>(&mut self, report: &SolveReport<W>) -> Result<()>
    where
        W: Weight + Serialize,
    {
        serde_json::to_writer_pretty(&mut self.out, report)
            .map_err(|e| Error::Output(e.to_string()))?;
        writeln!(self.out).map_err(|e| Error::Output(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::dijkstra::Dijkstra;
    use crate::algorithm::ShortestPathAlgorithm;
    use crate::graph::sample::{sample_graph, Item};
    use crate::graph::DirectedGraph;

    fn sample_report(end: Item) -> SolveReport<u32> {
        let graph = sample_graph().unwrap();
        let solution = Dijkstra::new().solve(&graph, &Item::Book, Some(&end)).unwrap();
        SolveReport::from_solution("Dijkstra", &solution, &Item::Book, Some(&end)).unwrap()
    }

    #[test]
    fn test_report_carries_path_and_total() {
        let report = sample_report(Item::Piano);

        assert!(report.reached);
        assert_eq!(report.total_cost, Some(35));
        assert_eq!(
            report.path,
            Some(vec![
                "book".to_string(),
                "rare_lp".to_string(),
                "drum_set".to_string(),
                "piano".to_string()
            ])
        );
        assert_eq!(report.predecessors["piano"], "drum_set");
    }

    #[test]
    fn test_text_sink_output() {
        let mut sink = TextSink::new(Vec::new());
        sink.emit(&sample_report(Item::Piano)).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.starts_with("Dijkstra from book to piano\n"));
        assert!(text.contains("  drum_set         25  rare_lp\n"));
        assert!(text.ends_with("Path: book -> rare_lp -> drum_set -> piano (cost 35)\n"));
    }

    #[test]
    fn test_json_sink_output() {
        let mut sink = JsonSink::new(Vec::new());
        sink.emit(&sample_report(Item::Piano)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();

        assert_eq!(value["start"], "book");
        assert_eq!(value["end"], "piano");
        assert_eq!(value["reached"], true);
        assert_eq!(value["costs"]["piano"], 35);
        assert_eq!(value["total_cost"], 35);
        assert_eq!(value["path"][1], "rare_lp");
    }

    #[test]
    fn test_no_path_report() {
        let graph = DirectedGraph::from_edges([("a", "b", 1u32), ("c", "d", 1)]).unwrap();
        let solution = Dijkstra::new().solve(&graph, &"a", Some(&"d")).unwrap();
        let report = SolveReport::from_solution("Dijkstra", &solution, &"a", Some(&"d")).unwrap();

        assert!(!report.reached);
        assert!(report.costs.is_empty());

        let mut sink = TextSink::new(Vec::new());
        sink.emit(&report).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "Dijkstra from a to d\nNo path from a to d\n");

        let mut sink = JsonSink::new(Vec::new());
        sink.emit(&report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(value["reached"], false);
        assert!(value.get("path").is_none());
    }
}
