//! Snapshot command implementation.

use metareader_core::{render, run_snapshot, CoreResult, RunConfig};
use std::io::Write;
use tracing::info;

/// Runs the snapshot command, writing the report to `out`.
pub fn run(config: &RunConfig, out: &mut impl Write) -> CoreResult<()> {
    info!("Reading snapshot markers from {:?}", config.path);

    let report = run_snapshot(config)?;
    render(&report, config.output, out)?;
    out.flush()?;
    Ok(())
}
