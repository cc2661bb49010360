//! Exact maximum independent set for small graphs.
//!
//! Branch and bound over candidate bitsets. At every step we take the
//! candidate `v` of minimum remaining degree: some maximum independent set
//! contains a vertex of `N[v]`, so branching over `N[v]` is complete. A vertex
//! of degree 0 or 1 is taken without branching. The bound is
//! `|current| + |candidates|`.

use super::{DenseGraph, IndependentSetSolver, check_sample_count, verified};
use crate::error::SolverError;
use crate::graph::AntennaGraph;
use crate::solution::IndependentSet;
use fixedbitset::FixedBitSet;
use log::debug;

#[derive(Debug, Clone, Copy)]
pub struct ExactSolver {
    /// Graphs with more nodes are refused with [`SolverError::Unavailable`].
    pub max_nodes: usize,
}

impl Default for ExactSolver {
    fn default() -> Self {
        ExactSolver { max_nodes: 64 }
    }
}

struct Search<'a> {
    dense: &'a DenseGraph,
    best: FixedBitSet,
    best_len: usize,
    visited: u64,
}

impl Search<'_> {
    fn expand(&mut self, current: &mut FixedBitSet, current_len: usize, candidates: FixedBitSet) {
        self.visited += 1;
        let remaining = candidates.count_ones(..);
        if remaining == 0 {
            if current_len > self.best_len {
                self.best = current.clone();
                self.best_len = current_len;
            }
            return;
        }
        if current_len + remaining <= self.best_len {
            return;
        }

        let dense = self.dense;
        let degree = |v: usize| dense.masks[v].intersection(&candidates).count();
        let Some(pivot) = candidates.ones().min_by_key(|&v| (degree(v), v)) else {
            return;
        };

        let mut branches = vec![pivot];
        if degree(pivot) > 1 {
            branches.extend(dense.masks[pivot].intersection(&candidates));
        }

        for u in branches {
            let mut next = candidates.clone();
            next.set(u, false);
            next.difference_with(&dense.masks[u]);
            current.insert(u);
            self.expand(current, current_len + 1, next);
            current.set(u, false);
        }
    }
}

impl IndependentSetSolver for ExactSolver {
    fn name(&self) -> &'static str {
        "exact"
    }

    /// `sample_count` is validated but otherwise unused: the search is exhaustive.
    fn solve(
        &self,
        graph: &AntennaGraph,
        sample_count: usize,
        label: &str,
    ) -> Result<IndependentSet, SolverError> {
        check_sample_count(sample_count)?;
        if graph.node_count() > self.max_nodes {
            return Err(SolverError::Unavailable(format!(
                "exact search is limited to {} nodes, graph has {}",
                self.max_nodes,
                graph.node_count()
            )));
        }

        let dense = DenseGraph::new(graph);
        let n = dense.len();
        let mut search = Search {
            dense: &dense,
            best: FixedBitSet::with_capacity(n),
            best_len: 0,
            visited: 0,
        };

        let mut candidates = FixedBitSet::with_capacity(n);
        candidates.insert_range(..);
        let mut current = FixedBitSet::with_capacity(n);
        search.expand(&mut current, 0, candidates);

        debug!(
            "exact search for '{}' visited {} states, best size {}",
            label, search.visited, search.best_len
        );
        let set = dense.to_set(&search.best);
        verified(graph, set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GreedySolver;

    #[test]
    fn test_triangle_has_size_one() {
        let g = AntennaGraph::from_edges(&[(1, 2), (1, 3), (2, 3)]).unwrap();
        let set = ExactSolver::default().solve(&g, 1, "triangle").unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_two_disjoint_edges() {
        let g = AntennaGraph::from_edges(&[(1, 2), (3, 4)]).unwrap();
        let set = ExactSolver::default().solve(&g, 1, "pairs").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.verify(&g).is_ok());
    }

    #[test]
    fn test_cycle_with_pendant() {
        // 5-cycle with a pendant on 1: the pendant plus two cycle nodes
        let g = AntennaGraph::from_edges(&[(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (1, 6)])
            .unwrap();
        let exact = ExactSolver::default().solve(&g, 1, "c5").unwrap();
        let greedy = GreedySolver.solve(&g, 1, "c5").unwrap();
        assert_eq!(exact.len(), 3);
        assert!(exact.len() >= greedy.len());
    }

    #[test]
    fn test_petersen_graph() {
        let outer = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)];
        let spokes = [(0, 5), (1, 6), (2, 7), (3, 8), (4, 9)];
        let inner = [(5, 7), (7, 9), (9, 6), (6, 8), (8, 5)];
        let edges: Vec<_> = outer.iter().chain(&spokes).chain(&inner).copied().collect();
        let g = AntennaGraph::from_edges(&edges).unwrap();
        let set = ExactSolver::default().solve(&g, 1, "petersen").unwrap();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_refuses_large_graphs() {
        let edges: Vec<_> = (1..=10).map(|i| (i, i + 1)).collect();
        let g = AntennaGraph::from_edges(&edges).unwrap();
        let err = ExactSolver { max_nodes: 5 }.solve(&g, 1, "path").unwrap_err();
        assert!(matches!(err, SolverError::Unavailable(_)));
    }
}
