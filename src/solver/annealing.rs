//! Simulated-annealing sampler over the QUBO form of maximum independent set.
//!
//! Energy of a selection `x`:
//!
//! ```text
//! E(x) = -sum_i x_i + lambda * sum_{(i,j) in E} x_i x_j
//! ```
//!
//! With `lambda > 1` every ground state is a maximum independent set. Each
//! read starts from a random state and runs single-flip Metropolis sweeps
//! while the inverse temperature grows geometrically from
//! `ln 2 / max|dE|` (hot) to `ln 100 / min|dE|` (cold). The lowest-energy
//! read wins.
//!
//! A sampler gives no feasibility guarantee, so the winning state is repaired
//! (conflicting nodes dropped, most conflicts first) and then extended to a
//! maximal set before it is returned.

use super::{DenseGraph, IndependentSetSolver, check_sample_count, verified};
use crate::error::SolverError;
use crate::graph::AntennaGraph;
use crate::solution::IndependentSet;
use fixedbitset::FixedBitSet;
use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct AnnealingSolver {
    /// Metropolis sweeps per read.
    pub sweeps: usize,
    /// Penalty for an edge with both ends selected. Must exceed 1.
    pub lagrange: f64,
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Wall-clock limit for the whole call, checked between sweeps.
    pub timeout: Option<Duration>,
}

impl Default for AnnealingSolver {
    fn default() -> Self {
        AnnealingSolver {
            sweeps: 1000,
            lagrange: 2.0,
            seed: None,
            timeout: None,
        }
    }
}

impl AnnealingSolver {
    pub fn with_seed(seed: u64) -> Self {
        AnnealingSolver {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

/// State of one read: selection bits plus, per node, how many selected neighbours it has.
struct Read<'a> {
    dense: &'a DenseGraph,
    lagrange: f64,
    x: Vec<bool>,
    selected_neighbors: Vec<usize>,
}

impl<'a> Read<'a> {
    fn random(dense: &'a DenseGraph, lagrange: f64, rng: &mut StdRng) -> Self {
        let n = dense.len();
        let x: Vec<bool> = (0..n).map(|_| rng.random_bool(0.5)).collect();
        let selected_neighbors = (0..n)
            .map(|v| dense.adj[v].iter().filter(|&&u| x[u]).count())
            .collect();
        Read {
            dense,
            lagrange,
            x,
            selected_neighbors,
        }
    }

    fn delta(&self, v: usize) -> f64 {
        let field = -1.0 + self.lagrange * self.selected_neighbors[v] as f64;
        if self.x[v] { -field } else { field }
    }

    fn flip(&mut self, v: usize) {
        self.x[v] = !self.x[v];
        for &u in &self.dense.adj[v] {
            if self.x[v] {
                self.selected_neighbors[u] += 1;
            } else {
                self.selected_neighbors[u] -= 1;
            }
        }
    }

    fn sweep(&mut self, beta: f64, rng: &mut StdRng) {
        for v in 0..self.x.len() {
            let delta = self.delta(v);
            if delta <= 0.0 || rng.random::<f64>() < (-beta * delta).exp() {
                self.flip(v);
            }
        }
    }

    fn energy(&self) -> f64 {
        let mut selected = 0usize;
        let mut conflicts = 0usize;
        for v in 0..self.x.len() {
            if self.x[v] {
                selected += 1;
                conflicts += self.selected_neighbors[v];
            }
        }
        // every conflicting edge was counted from both ends
        -(selected as f64) + self.lagrange * (conflicts / 2) as f64
    }
}

/// Geometric inverse-temperature schedule with `steps` entries.
fn beta_schedule(hot: f64, cold: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![cold],
        _ => {
            let ratio = (cold / hot).powf(1.0 / (steps - 1) as f64);
            (0..steps).map(|k| hot * ratio.powi(k as i32)).collect()
        }
    }
}

/// Drops conflicting nodes until `chosen` is independent. Most conflicts go first,
/// smaller index on ties.
fn repair(dense: &DenseGraph, chosen: &mut FixedBitSet) {
    loop {
        let worst = {
            let current: &FixedBitSet = chosen;
            current
                .ones()
                .map(|v| (dense.masks[v].intersection(current).count(), v))
                .filter(|&(conflicts, _)| conflicts > 0)
                .max_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
        };
        match worst {
            Some((_, v)) => chosen.set(v, false),
            None => break,
        }
    }
}

impl IndependentSetSolver for AnnealingSolver {
    fn name(&self) -> &'static str {
        "simulated-annealing"
    }

    fn solve(
        &self,
        graph: &AntennaGraph,
        sample_count: usize,
        label: &str,
    ) -> Result<IndependentSet, SolverError> {
        check_sample_count(sample_count)?;
        if self.sweeps == 0 {
            return Err(SolverError::Failed(String::from(
                "annealing needs at least one sweep",
            )));
        }
        if self.lagrange <= 1.0 {
            return Err(SolverError::Failed(format!(
                "edge penalty {} does not make conflicts unprofitable",
                self.lagrange
            )));
        }

        let dense = DenseGraph::new(graph);
        let n = dense.len();
        info!(
            "annealing '{}': {} nodes, {} reads x {} sweeps",
            label, n, sample_count, self.sweeps
        );
        if n == 0 {
            return Ok(IndependentSet::default());
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // largest |dE| comes from a node with every neighbour selected; smallest is the linear bias
        let max_delta = 1.0 + self.lagrange * dense.max_degree() as f64;
        let min_delta = 1.0_f64.min(self.lagrange - 1.0);
        let betas = beta_schedule(2f64.ln() / max_delta, 100f64.ln() / min_delta, self.sweeps);

        let started = Instant::now();
        let mut best: Option<(f64, Vec<bool>)> = None;

        for read_no in 0..sample_count {
            let mut read = Read::random(&dense, self.lagrange, &mut rng);
            for &beta in &betas {
                if let Some(limit) = self.timeout {
                    let elapsed = started.elapsed();
                    if elapsed >= limit {
                        return Err(SolverError::Timeout { elapsed, limit });
                    }
                }
                read.sweep(beta, &mut rng);
            }

            let energy = read.energy();
            debug!("read {} finished with energy {}", read_no, energy);
            if best.as_ref().is_none_or(|(e, _)| energy < *e) {
                best = Some((energy, read.x));
            }
        }

        let Some((energy, x)) = best else {
            return Err(SolverError::Failed(String::from("no reads were taken")));
        };

        let mut chosen = FixedBitSet::with_capacity(n);
        for (v, &on) in x.iter().enumerate() {
            chosen.set(v, on);
        }
        let sampled = chosen.count_ones(..);
        repair(&dense, &mut chosen);
        dense.extend_to_maximal(&mut chosen);

        info!(
            "annealing '{}' done in {:?}: best energy {}, {} sampled -> {} after repair",
            label,
            started.elapsed(),
            energy,
            sampled,
            chosen.count_ones(..)
        );
        verified(graph, dense.to_set(&chosen))
    }
}
