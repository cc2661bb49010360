//! Antenna selection demo on the fixed 29-antenna interference graph.
//!
//! Usage: `RUST_LOG=debug cargo run` to see the sampler's progress.

use anyhow::{Context, Result};
use antenna_selection::app::{ANTENNA_EDGES, run};
use antenna_selection::{AnnealingSolver, AntennaGraph, Params};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = Params::default();
    let graph = AntennaGraph::from_edges(&ANTENNA_EDGES).context("building antenna graph")?;
    let solver = AnnealingSolver::default();

    let stdout = std::io::stdout();
    let summary = run(&solver, &graph, &params, &mut stdout.lock())
        .with_context(|| format!("run '{}' failed", params.label))?;

    info!(
        "{} of {} antennas selected",
        summary.set.len(),
        graph.node_count()
    );
    Ok(())
}
