use super::{DenseGraph, IndependentSetSolver, check_sample_count, verified};
use crate::error::SolverError;
use crate::graph::AntennaGraph;
use crate::solution::IndependentSet;
use fixedbitset::FixedBitSet;
use log::debug;

/// Minimum-degree greedy heuristic.
///
/// Repeatedly takes the vertex with the fewest remaining neighbours (smallest
/// id on ties) and discards its neighbourhood. Deterministic and maximal, but
/// not necessarily maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl IndependentSetSolver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(
        &self,
        graph: &AntennaGraph,
        sample_count: usize,
        label: &str,
    ) -> Result<IndependentSet, SolverError> {
        check_sample_count(sample_count)?;
        let dense = DenseGraph::new(graph);
        let n = dense.len();

        let mut alive = FixedBitSet::with_capacity(n);
        alive.insert_range(..);
        let mut chosen = FixedBitSet::with_capacity(n);

        while !alive.is_clear() {
            let Some(v) = alive
                .ones()
                .min_by_key(|&v| (dense.masks[v].intersection(&alive).count(), v))
            else {
                break;
            };
            chosen.insert(v);
            alive.set(v, false);
            alive.difference_with(&dense.masks[v]);
        }

        debug!("greedy picked {} of {} nodes for '{}'", chosen.count_ones(..), n, label);
        verified(graph, dense.to_set(&chosen))
    }
}
