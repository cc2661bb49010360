//! Spring layout shared by both figures.
//!
//! Wraps the `force_graph` physics simulation: nodes start evenly spaced on a
//! circle in ascending id order, the simulation runs for a fixed number of
//! ticks, and the result is normalised into the unit square. No randomness is
//! involved, so the same graph always gets the same picture.

use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use hashbrown::HashMap;
use log::debug;

use crate::graph::AntennaGraph;
use crate::types::NodeId;

/// Simulation knobs.
#[derive(Clone, Debug)]
pub struct LayoutParams {
    pub iterations: usize,
    /// Simulated seconds per tick.
    pub dt: f32,
    /// Radius of the starting circle.
    pub radius: f64,
    pub force_charge: f32,
    pub force_spring: f32,
    pub force_max: f32,
    pub node_speed: f32,
    pub damping_factor: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            iterations: 600,
            dt: 0.016,
            radius: 100.0,
            force_charge: 150.0,
            force_spring: 0.05,
            force_max: 100.0,
            node_speed: 3000.0,
            damping_factor: 0.9,
        }
    }
}

/// Node positions in `[0, 1] x [0, 1]`. Computed once and reused for every figure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    positions: HashMap<NodeId, (f64, f64)>,
}

impl Layout {
    pub fn position(&self, id: NodeId) -> Option<(f64, f64)> {
        self.positions.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Maps a unit-square position onto a `width x height` canvas leaving `margin` pixels free.
    pub fn to_pixels(&self, id: NodeId, width: u32, height: u32, margin: u32) -> Option<(f32, f32)> {
        let (x, y) = self.position(id)?;
        let usable_w = width.saturating_sub(2 * margin) as f64;
        let usable_h = height.saturating_sub(2 * margin) as f64;
        Some((
            (margin as f64 + x * usable_w) as f32,
            (margin as f64 + y * usable_h) as f32,
        ))
    }
}

/// Runs the force simulation on `graph` and returns normalised positions.
pub fn spring_layout(graph: &AntennaGraph, params: &LayoutParams) -> Layout {
    let ids = graph.nodes();
    if ids.is_empty() {
        return Layout::default();
    }

    let mut sim: ForceGraph<NodeId, ()> = ForceGraph::new(SimulationParameters {
        force_charge: params.force_charge,
        force_spring: params.force_spring,
        force_max: params.force_max,
        node_speed: params.node_speed,
        damping_factor: params.damping_factor,
    });

    let mut idx_of = HashMap::new();
    for (i, &id) in ids.iter().enumerate() {
        let angle = (i as f64) * 2.0 * PI / ids.len() as f64;
        let idx = sim.add_node(NodeData {
            x: (params.radius * angle.cos()) as f32,
            y: (params.radius * angle.sin()) as f32,
            mass: 10.0,
            is_anchor: false,
            user_data: id,
        });
        idx_of.insert(id, idx);
    }
    for (u, v) in graph.edges() {
        sim.add_edge(idx_of[&u], idx_of[&v], EdgeData::default());
    }

    for _ in 0..params.iterations {
        sim.update(params.dt);
    }

    let mut raw = Vec::with_capacity(ids.len());
    sim.visit_nodes(|node| {
        raw.push((node.data.user_data, node.x() as f64, node.y() as f64));
    });

    let layout = normalize(&raw);
    debug!(
        "spring layout of {} nodes after {} ticks",
        layout.len(),
        params.iterations
    );
    layout
}

/// Scales raw coordinates into the unit square, keeping the aspect ratio.
/// A degenerate extent (single node, or all nodes stacked) lands in the centre.
fn normalize(raw: &[(NodeId, f64, f64)]) -> Layout {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(_, x, y) in raw {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    let span = (max_x - min_x).max(max_y - min_y);

    let positions = raw
        .iter()
        .map(|&(id, x, y)| {
            if !span.is_finite() || span <= f64::EPSILON {
                return (id, (0.5, 0.5));
            }
            let nx = (x - min_x) / span + (1.0 - (max_x - min_x) / span) / 2.0;
            let ny = (y - min_y) / span + (1.0 - (max_y - min_y) / span) / 2.0;
            (id, (nx, ny))
        })
        .collect();

    Layout { positions }
}
