//! Error types for the codec crate.

use std::fmt;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// A named field inside a fixed-layout record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Sequence number of a failover entry.
    FailoverSeqno,
    /// UUID of a failover entry.
    FailoverUuid,
    /// Snapshot start sequence number.
    SnapshotStart,
    /// Snapshot end sequence number.
    SnapshotEnd,
    /// Last sequence number covered by the snapshot.
    SnapshotSeqno,
}

impl Field {
    /// Returns the name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FailoverSeqno => "seq",
            Self::FailoverUuid => "uuid",
            Self::SnapshotStart => "start",
            Self::SnapshotEnd => "end",
            Self::SnapshotSeqno => "seqNo",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while decoding a record file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer ran out while reading a field.
    #[error("could not read {field} due to: {reason}")]
    RecordRead {
        /// Field being read when the buffer ran out.
        field: Field,
        /// Underlying short-read cause.
        reason: String,
    },

    /// A failover entry has a lower sequence number than the entry before it.
    #[error(
        "failover entry {index}: seqno {found} must not be lower than seqno {previous} in last log entry"
    )]
    SequenceRegression {
        /// Position of the offending entry.
        index: usize,
        /// Sequence number of the previous entry.
        previous: u64,
        /// Sequence number of the offending entry.
        found: u64,
    },
}

impl CodecError {
    /// Create a short-read error for `field`.
    pub fn short_read(field: Field, needed: usize, available: usize) -> Self {
        Self::RecordRead {
            field,
            reason: format!("unexpected end of input (needed {needed} bytes, {available} left)"),
        }
    }

    /// Returns the field that could not be read, if this is a read error.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::RecordRead { field, .. } => Some(*field),
            Self::SequenceRegression { .. } => None,
        }
    }
}
