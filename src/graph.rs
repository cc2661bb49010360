use crate::error::{Error, Result};
use crate::solution::IndependentSet;
use crate::types::{NodeId, UnGraph};
use hashbrown::HashMap;
use log::debug;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use radsort::sort_by_key;

/// Undirected interference graph between antennas.
///
/// Built once from a literal edge list and never mutated afterwards.
/// Every endpoint of an edge becomes a node; repeated edges are stored once.
///
/// <div class="warning">
///
/// > Petgraph decides the internal indices of nodes and edges. Use the
/// > accessors here, which speak in antenna ids, rather than raw indices.
///
/// </div>
#[derive(Debug, Clone, Default)]
pub struct AntennaGraph {
    graph: UnGraph,
    index_of: HashMap<NodeId, NodeIndex>,
}

impl AntennaGraph {
    /// Builds a graph from a list of `(u, v)` pairs.
    ///
    /// Fails with [`Error::InvalidEdge`] on a self-loop.
    ///
    /// ```
    /// use antenna_selection::AntennaGraph;
    ///
    /// let g = AntennaGraph::from_edges(&[(1, 2), (2, 3), (1, 2)]).unwrap();
    /// assert_eq!(g.node_count(), 3);
    /// assert_eq!(g.edge_count(), 2);
    /// ```
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> Result<Self> {
        let mut g = AntennaGraph::default();
        for &(u, v) in edges {
            g.insert_edge(u, v)?;
        }
        debug!(
            "built graph with {} nodes and {} edges from {} entries",
            g.node_count(),
            g.edge_count(),
            edges.len()
        );
        Ok(g)
    }

    fn insert_node(&mut self, id: NodeId) -> NodeIndex {
        *self
            .index_of
            .entry(id)
            .or_insert_with(|| self.graph.add_node(id))
    }

    fn insert_edge(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        if u == v {
            return Err(Error::InvalidEdge { u, v });
        }
        let a = self.insert_node(u);
        let b = self.insert_node(v);
        // update_edge keeps parallel entries idempotent
        self.graph.update_edge(a, b, ());
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All antenna ids, ascending.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.graph.node_weights().copied().collect();
        radsort::sort(&mut nodes);
        nodes
    }

    /// All edges as `(min, max)` pairs, ascending.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges: Vec<(NodeId, NodeId)> = self
            .graph
            .edge_references()
            .map(|e| {
                let u = self.graph[e.source()];
                let v = self.graph[e.target()];
                (u.min(v), u.max(v))
            })
            .collect();
        sort_by_key(&mut edges, |&(u, v)| ((u as u64) << 32) | v as u64);
        edges
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index_of.contains_key(&id)
    }

    pub fn contains_edge(&self, u: NodeId, v: NodeId) -> bool {
        match (self.index_of.get(&u), self.index_of.get(&v)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Neighbours of `id`, ascending. Empty if `id` is not in the graph.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let Some(&idx) = self.index_of.get(&id) else {
            return Vec::new();
        };
        let mut out: Vec<NodeId> = self.graph.neighbors(idx).map(|n| self.graph[n]).collect();
        radsort::sort(&mut out);
        out
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.index_of
            .get(&id)
            .map_or(0, |&idx| self.graph.neighbors(idx).count())
    }

    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.index_of.get(&id).copied()
    }

    /// Underlying petgraph graph. Node weights are antenna ids.
    pub fn inner(&self) -> &UnGraph {
        &self.graph
    }

    /// Subgraph with exactly the given nodes and every edge having both ends among them.
    ///
    /// Ids that are not in the graph are skipped.
    pub fn induced_subgraph(&self, ids: &[NodeId]) -> AntennaGraph {
        let mut sub = AntennaGraph::default();
        for &id in ids {
            if self.contains_node(id) {
                sub.insert_node(id);
            }
        }
        for (u, v) in self.edges() {
            if sub.contains_node(u) && sub.contains_node(v) {
                let (a, b) = (sub.index_of[&u], sub.index_of[&v]);
                sub.graph.update_edge(a, b, ());
            }
        }
        sub
    }

    /// Nodes of the graph that are not in `set`, ascending.
    pub fn complement_of(&self, set: &IndependentSet) -> Vec<NodeId> {
        self.nodes()
            .into_iter()
            .filter(|id| !set.contains(*id))
            .collect()
    }
}

impl PartialEq for AntennaGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes() == other.nodes() && self.edges() == other.edges()
    }
}

impl Eq for AntennaGraph {}
