//! DOT rendering of a solved graph, for poking at results with Graphviz.
//!
//! Intended to be used with `neato`, e.g. piping the string into
//! `neato -Tsvg > solution.svg`. Nothing here touches the filesystem.

use dot::{Edges, GraphWalk, Labeller, Nodes, Style};

use crate::graph::AntennaGraph;
use crate::solution::IndependentSet;
use crate::types::{NodeId, Side};

type Edge = (NodeId, NodeId);

struct SolvedGraph<'a> {
    graph: &'a AntennaGraph,
    set: &'a IndependentSet,
}

impl<'a> Labeller<'a, NodeId, Edge> for SolvedGraph<'a> {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("antennas").unwrap()
    }

    fn node_id(&'a self, n: &NodeId) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &NodeId) -> dot::LabelText<'a> {
        dot::LabelText::label(n.to_string())
    }

    fn node_style(&'a self, _n: &NodeId) -> Style {
        Style::Filled
    }

    fn node_color(&'a self, n: &NodeId) -> Option<dot::LabelText<'a>> {
        let color = match self.set.side_of(*n) {
            Side::Selected => "red",
            Side::Unselected => "lightblue",
        };
        Some(dot::LabelText::label(color))
    }

    /// Edges inside one side are solid; edges across the partition are dashed.
    fn edge_style(&'a self, e: &Edge) -> Style {
        if self.set.side_of(e.0) == self.set.side_of(e.1) {
            Style::Solid
        } else {
            Style::Dashed
        }
    }

    fn kind(&self) -> dot::Kind {
        dot::Kind::Graph
    }
}

impl<'a> GraphWalk<'a, NodeId, Edge> for SolvedGraph<'a> {
    fn nodes(&'a self) -> Nodes<'a, NodeId> {
        self.graph.nodes().into()
    }

    fn edges(&'a self) -> Edges<'a, Edge> {
        self.graph.edges().into()
    }

    fn source(&'a self, e: &Edge) -> NodeId {
        e.0
    }

    fn target(&'a self, e: &Edge) -> NodeId {
        e.1
    }
}

/// Returns the graph in DOT format with selected antennas filled red.
pub fn draw_solution_dot(graph: &AntennaGraph, set: &IndependentSet) -> String {
    let solved = SolvedGraph { graph, set };
    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&solved, &mut buffer).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}
