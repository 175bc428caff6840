//! # metareader codec
//!
//! Decoders for the metadata files a backup repository keeps per vBucket.
//!
//! Both formats are headerless runs of big-endian `u64` fields:
//!
//! - failover logs (`failoverlog_<vbid>.fol`): repeated `[seqno][uuid]`
//! - snapshot markers (`snapshot_<vbid>.snp`): one `[start][end][seqNo]`
//!
//! ## Usage
//!
//! ```
//! use metareader_codec::{decode_snapshot, SnapshotMarker};
//!
//! let bytes: Vec<u8> = [100u64, 200, 150]
//!     .iter()
//!     .flat_map(|v| v.to_be_bytes())
//!     .collect();
//! let marker = decode_snapshot(&bytes).unwrap();
//! assert_eq!(marker, SnapshotMarker { start: 100, end: 200, seqno: 150 });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod failover;
mod reader;
mod snapshot;

pub use error::{CodecError, CodecResult, Field};
pub use failover::{decode_failover_log, FailoverEntry, FailoverLog, FAILOVER_ENTRY_SIZE};
pub use reader::RecordReader;
pub use snapshot::{decode_snapshot, SnapshotMarker, SNAPSHOT_MARKER_SIZE};

/// Crate version, reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Trait for records that can be decoded from the full contents of a file.
pub trait Decode: Sized {
    /// Decode this record from bytes.
    fn decode(bytes: &[u8]) -> CodecResult<Self>;
}
