//! metareader CLI
//!
//! Prints the failover logs and snapshot markers kept in a backup data
//! directory in human readable form.
//!
//! # Commands
//!
//! - `snapshot` - Read and display snapshot marker files
//! - `failoverlog` - Read and display failover log files
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use metareader_core::RunConfig;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Read and present backup snapshot and failover files in human readable form.
#[derive(Parser)]
#[command(name = "metareader")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read and display the snapshot file data
    Snapshot {
        /// The directory used to store backup data
        #[arg(short, long)]
        path: PathBuf,

        /// Comma separated list of vbuckets to read snapshot data, it also
        /// accepts ranges (e.g. 1-100,300)
        #[arg(long)]
        filter: Option<String>,

        /// Returns snapshot data as json
        #[arg(short, long)]
        json: bool,
    },

    /// Read and display the failover log data
    Failoverlog {
        /// The directory used to store backup data
        #[arg(short, long)]
        path: PathBuf,

        /// Comma separated list of vbuckets to read failover log data, it
        /// also accepts ranges (e.g. 1-100,300)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the report.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Snapshot { path, filter, json } => {
            let config = RunConfig::new(path).filter_opt(filter).structured(json);
            commands::snapshot::run(&config, &mut out)
        }
        Commands::Failoverlog { path, filter } => {
            let config = RunConfig::new(path).filter_opt(filter);
            commands::failoverlog::run(&config, &mut out)
        }
        Commands::Version => {
            println!("metareader v{}", env!("CARGO_PKG_VERSION"));
            println!("metareader codec v{}", metareader_codec::VERSION);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
