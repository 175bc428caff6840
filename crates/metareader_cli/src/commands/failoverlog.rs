//! Failover log command implementation.

use metareader_core::{render_text, run_failover, CoreResult, RunConfig};
use std::io::Write;
use tracing::info;

/// Runs the failoverlog command, writing the report to `out`.
///
/// Failover logs are always printed as text.
pub fn run(config: &RunConfig, out: &mut impl Write) -> CoreResult<()> {
    info!("Reading failover logs from {:?}", config.path);

    let report = run_failover(config)?;
    render_text(&report, out)?;
    out.flush()?;
    Ok(())
}
