// #![warn(missing_docs)]

//! # antenna_selection
//!
//! Picks a largest set of non-interfering antennas: the antennas and their
//! interference pairs form a graph, and the answer is a maximum independent
//! set of it.
//!
//! The solver is pluggable through [`IndependentSetSolver`]. The crate ships
//! a simulated-annealing sampler, an exact branch-and-bound search for small
//! graphs and a greedy heuristic. Results are printed and drawn as two PNG
//! figures sharing one spring layout.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).

pub mod app;
pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod layout;
pub mod output;
pub mod render;
pub mod report;
pub mod solution;
pub mod solver;
#[cfg(test)]
mod testing;
pub mod types;

pub use config::Params;
pub use error::{Error, SolverError};
pub use graph::AntennaGraph;
pub use solution::IndependentSet;
pub use solver::{AnnealingSolver, ExactSolver, GreedySolver, IndependentSetSolver};
pub use types::{NodeId, Side, UnGraph};
