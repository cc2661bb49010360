//! Independent-set backends behind a common interface.
//!
//! The driver only sees [`IndependentSetSolver`]. Which backend runs is decided
//! by whoever calls it: the demo uses the annealer, tests usually inject
//! [`ExactSolver`] so that answers are deterministic.

pub mod annealing;
pub mod exact;
pub mod greedy;

pub use annealing::AnnealingSolver;
pub use exact::ExactSolver;
pub use greedy::GreedySolver;

use crate::error::SolverError;
use crate::graph::AntennaGraph;
use crate::solution::IndependentSet;
use crate::types::NodeId;
use fixedbitset::FixedBitSet;
use hashbrown::HashMap;

/// A capability that returns a large (ideally maximum) independent set.
pub trait IndependentSetSolver {
    /// Short backend name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the best independent set the backend finds.
    ///
    /// `sample_count` bounds how many candidates are evaluated and must be at
    /// least 1. `label` is a bookkeeping tag that never affects the result.
    fn solve(
        &self,
        graph: &AntennaGraph,
        sample_count: usize,
        label: &str,
    ) -> Result<IndependentSet, SolverError>;
}

impl<S: IndependentSetSolver + ?Sized> IndependentSetSolver for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(
        &self,
        graph: &AntennaGraph,
        sample_count: usize,
        label: &str,
    ) -> Result<IndependentSet, SolverError> {
        (**self).solve(graph, sample_count, label)
    }
}

pub(crate) fn check_sample_count(sample_count: usize) -> Result<(), SolverError> {
    if sample_count == 0 {
        return Err(SolverError::Failed(String::from(
            "sample count must be at least 1",
        )));
    }
    Ok(())
}

/// Rejects a candidate that is not independent in `graph`.
pub(crate) fn verified(
    graph: &AntennaGraph,
    set: IndependentSet,
) -> Result<IndependentSet, SolverError> {
    set.verify(graph)
        .map_err(|e| SolverError::Failed(e.to_string()))?;
    Ok(set)
}

/// Graph relabelled to `0..n` in ascending antenna-id order.
///
/// Backends work on dense indices; `ids[i]` maps back to the antenna.
#[derive(Debug, Clone)]
pub(crate) struct DenseGraph {
    pub ids: Vec<NodeId>,
    pub adj: Vec<Vec<usize>>,
    pub masks: Vec<FixedBitSet>,
}

impl DenseGraph {
    pub fn new(graph: &AntennaGraph) -> Self {
        let ids = graph.nodes();
        let n = ids.len();
        let position: HashMap<NodeId, usize> =
            ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut adj = vec![Vec::new(); n];
        let mut masks = vec![FixedBitSet::with_capacity(n); n];
        for (u, v) in graph.edges() {
            let (a, b) = (position[&u], position[&v]);
            adj[a].push(b);
            adj[b].push(a);
            masks[a].insert(b);
            masks[b].insert(a);
        }

        DenseGraph { ids, adj, masks }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn to_set(&self, chosen: &FixedBitSet) -> IndependentSet {
        IndependentSet::new(chosen.ones().map(|i| self.ids[i]).collect())
    }

    /// Adds free vertices, lowest degree first, until `chosen` is maximal.
    ///
    /// `chosen` must already be independent.
    pub fn extend_to_maximal(&self, chosen: &mut FixedBitSet) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by_key(|&v| (self.adj[v].len(), v));
        for v in order {
            if !chosen.contains(v) && self.adj[v].iter().all(|&u| !chosen.contains(u)) {
                chosen.insert(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::graph_enumerator::GraphEnumeratorState;
    use crate::testing::random_graphs::random_graph;

    fn brute_force_size(graph: &AntennaGraph) -> usize {
        let dense = DenseGraph::new(graph);
        let n = dense.len();
        (0u32..1 << n)
            .filter(|mask| {
                (0..n).all(|v| {
                    mask & (1 << v) == 0 || dense.adj[v].iter().all(|&u| mask & (1 << u) == 0)
                })
            })
            .map(|mask| mask.count_ones() as usize)
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_exact_matches_brute_force_on_all_small_graphs() {
        for edges in GraphEnumeratorState::new(5) {
            let g = AntennaGraph::from_edges(&edges).unwrap();
            let set = ExactSolver::default().solve(&g, 1, "enum").unwrap();
            assert_eq!(set.len(), brute_force_size(&g), "edges {:?}", edges);
        }
    }

    #[test]
    fn test_backends_agree_on_validity() {
        let annealer = AnnealingSolver {
            sweeps: 100,
            ..AnnealingSolver::with_seed(9)
        };
        for seed in 0..20 {
            let g = random_graph(14, 30, seed);
            let optimum = ExactSolver::default().solve(&g, 1, "random").unwrap();
            for set in [
                GreedySolver.solve(&g, 1, "random").unwrap(),
                annealer.solve(&g, 3, "random").unwrap(),
            ] {
                assert!(set.verify(&g).is_ok());
                assert!(set.is_maximal(&g));
                assert!(!set.is_empty());
                assert!(set.len() <= optimum.len());
            }
        }
    }

    #[test]
    fn test_dense_graph_follows_id_order() {
        let g = AntennaGraph::from_edges(&[(30, 2), (2, 7)]).unwrap();
        let dense = DenseGraph::new(&g);
        assert_eq!(dense.ids, vec![2, 7, 30]);
        assert_eq!(dense.adj[0].len(), 2);
        assert!(dense.masks[0].contains(1));
        assert!(dense.masks[0].contains(2));
        assert!(!dense.masks[1].contains(2));
        assert_eq!(dense.max_degree(), 2);
    }

    #[test]
    fn test_extend_to_maximal() {
        // star 1-{2,3,4} plus isolated edge 5-6
        let g = AntennaGraph::from_edges(&[(1, 2), (1, 3), (1, 4), (5, 6)]).unwrap();
        let dense = DenseGraph::new(&g);
        let mut chosen = FixedBitSet::with_capacity(dense.len());
        dense.extend_to_maximal(&mut chosen);
        let set = dense.to_set(&chosen);
        assert_eq!(set.members(), &[2, 3, 4, 5]);
        assert!(set.is_maximal(&g));
    }

    #[test]
    fn test_zero_samples_is_an_error() {
        assert!(matches!(check_sample_count(0), Err(SolverError::Failed(_))));
        assert!(check_sample_count(1).is_ok());
    }
}
