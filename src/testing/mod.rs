//! Graph generators shared by unit tests.

pub mod graph_enumerator;
pub mod random_graphs;
