//! # metareader core
//!
//! Reads the per-vBucket metadata files of a backup data directory and
//! renders them for humans or tools.
//!
//! This crate provides:
//! - vBucket filter expressions (`1-100,300`)
//! - Directory scanning for `failoverlog_<vbid>.fol` and `snapshot_<vbid>.snp`
//! - The selection controller, which reads and decodes every selected file
//!   and reports per-file outcomes without aborting the batch
//! - Text and JSON rendering
//!
//! ## Example
//!
//! ```no_run
//! use metareader_core::{render, run_snapshot, RunConfig};
//!
//! let config = RunConfig::new("/backups/repo/data").filter("0-15");
//! let report = run_snapshot(&config).unwrap();
//! render(&report, config.output, &mut std::io::stdout()).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod filter;
mod record;
mod render;
mod scan;
mod select;
mod types;

pub use config::{OutputOptions, RunConfig};
pub use error::{CoreError, CoreResult, FilterError};
pub use filter::{parse_filter, MAX_RANGE_SPAN};
pub use record::Record;
pub use render::{notice, render, render_structured, render_text, text_line};
pub use scan::{scan, ScannedFile};
pub use select::{run, run_failover, run_snapshot, Outcome, Report};
pub use types::{Domain, VbId};
