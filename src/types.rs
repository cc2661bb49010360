/// Antenna identifier as it appears in the edge list.
pub type NodeId = u32;

/// Wrapper for petgraph's graph type. Node weights are antenna ids.
pub type UnGraph = petgraph::graph::UnGraph<NodeId, ()>;

/// Which side of the partition a node belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Selected,
    Unselected,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Selected => write!(f, "Selected"),
            Side::Unselected => write!(f, "Unselected"),
        }
    }
}
