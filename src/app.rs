//! End-to-end run: solve, report, draw.

use std::io::Write;

use log::info;

use crate::config::Params;
use crate::error::Result;
use crate::graph::AntennaGraph;
use crate::layout::{Layout, spring_layout};
use crate::render::{SavedFigures, Visualizer};
use crate::report::{format_saved, print_report};
use crate::solution::IndependentSet;
use crate::solver::IndependentSetSolver;
use crate::types::NodeId;

/// Interference edges of the antenna demo. The duplicate `(3, 5)` is intentional.
#[rustfmt::skip]
pub const ANTENNA_EDGES: [(NodeId, NodeId); 36] = [
    (1, 2), (1, 3), (2, 3), (3, 4), (3, 5), (4, 5),
    (4, 6), (5, 6), (6, 7), (1, 7), (2, 7), (8, 7),
    (9, 8), (10, 9), (11, 10), (1, 11), (3, 5), (13, 14),
    (1, 14), (15, 16), (16, 17), (17, 18), (18, 19), (19, 20),
    (20, 21), (21, 22), (22, 23), (22, 24), (22, 25), (22, 26),
    (22, 27), (22, 28), (22, 29), (22, 30), (23, 30), (19, 9),
];

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub set: IndependentSet,
    pub complement: Vec<NodeId>,
    pub layout: Layout,
    pub figures: SavedFigures,
}

/// Solves `graph` with the injected `solver`, prints the report to `out` and
/// writes both figures.
///
/// Any failure aborts the run; there is no retry and no fallback backend.
pub fn run<W: Write>(
    solver: &dyn IndependentSetSolver,
    graph: &AntennaGraph,
    params: &Params,
    out: &mut W,
) -> Result<RunSummary> {
    info!(
        "solving '{}' with {} ({} nodes, {} edges, {} samples)",
        params.label,
        solver.name(),
        graph.node_count(),
        graph.edge_count(),
        params.sample_count
    );
    let set = solver.solve(graph, params.sample_count, &params.label)?;
    set.verify(graph)?;

    print_report(out, &set)?;

    let complement = graph.complement_of(&set);
    let layout = spring_layout(graph, &params.layout);
    let figures = Visualizer::from_params(params).render(graph, &set, &layout)?;

    writeln!(out, "{}", format_saved(&figures.original, &figures.solution))?;

    Ok(RunSummary {
        set,
        complement,
        layout,
        figures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_edges() {
        let g = AntennaGraph::from_edges(&ANTENNA_EDGES).unwrap();
        // 12 never appears, so the 1..=30 range yields 29 antennas
        assert_eq!(g.node_count(), 29);
        assert!(!g.contains_node(12));
        assert_eq!(g.edge_count(), 35);
        assert_eq!(g.degree(22), 9);
    }
}
