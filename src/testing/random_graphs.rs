use crate::graph::AntennaGraph;
use crate::types::NodeId;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Connected random graph on ids `1..=n`: a random spanning tree plus extra
/// random edges up to `m` draws. Self-loop draws are skipped.
pub fn random_graph(n: usize, m: usize, seed: u64) -> AntennaGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<(NodeId, NodeId)> = Vec::with_capacity(m);

    for i in 1..n {
        let j = rng.random_range(0..i);
        edges.push((i as NodeId + 1, j as NodeId + 1));
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(1..=n as NodeId);
        let t = rng.random_range(1..=n as NodeId);
        if s != t {
            edges.push((s, t));
        }
    }

    AntennaGraph::from_edges(&edges).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_graph_is_spanning() {
        let g = random_graph(12, 20, 3);
        assert_eq!(g.node_count(), 12);
        assert!(g.edge_count() >= 11);
    }
}
