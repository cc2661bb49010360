use std::time::Duration;

use thiserror::Error;

use crate::types::NodeId;

/// Failures reported by an independent-set backend.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("solver unavailable: {0}")]
    Unavailable(String),

    #[error("solver timed out after {elapsed:?} (limit {limit:?})")]
    Timeout { elapsed: Duration, limit: Duration },

    #[error("solver failed: {0}")]
    Failed(String),
}

/// Crate-wide error type. Nothing is recovered locally; every variant aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid edge ({u}, {v}): self-loops are not allowed")]
    InvalidEdge { u: NodeId, v: NodeId },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid solution: {0}")]
    InvalidSolution(String),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
