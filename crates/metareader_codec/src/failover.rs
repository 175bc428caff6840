//! Failover log records.
//!
//! A failover log file is a run of 16-byte records, each holding a
//! big-endian sequence number followed by a big-endian vBucket UUID:
//!
//! ```text
//! ┌──────────────┬──────────────┐
//! │ seqno (u64)  │ uuid (u64)   │  × N, trailing partial record ignored
//! └──────────────┴──────────────┘
//! ```

use crate::error::{CodecError, CodecResult, Field};
use crate::reader::{RecordReader, FIELD_SIZE};
use crate::Decode;
use serde::Serialize;
use std::fmt;

/// Size of one failover entry on disk.
pub const FAILOVER_ENTRY_SIZE: usize = 2 * FIELD_SIZE;

/// One failover point: the sequence number at which ownership changed and
/// the UUID of the new history branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FailoverEntry {
    /// Sequence number.
    pub seq: u64,
    /// vBucket UUID.
    pub uuid: u64,
}

impl FailoverEntry {
    /// Creates a new entry.
    #[must_use]
    pub const fn new(seq: u64, uuid: u64) -> Self {
        Self { seq, uuid }
    }
}

impl fmt::Display for FailoverEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{seq: {}, uuid: {}}}", self.seq, self.uuid)
    }
}

/// Ordered failover history for a single vBucket.
///
/// # Invariants
///
/// - Sequence numbers never decrease from one entry to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FailoverLog {
    entries: Vec<FailoverEntry>,
}

impl FailoverLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, rejecting it if its sequence number is lower than
    /// the last entry's.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SequenceRegression`] on an ordering violation.
    pub fn push(&mut self, entry: FailoverEntry) -> CodecResult<()> {
        if let Some(last) = self.entries.last() {
            if entry.seq < last.seq {
                return Err(CodecError::SequenceRegression {
                    index: self.entries.len(),
                    previous: last.seq,
                    found: entry.seq,
                });
            }
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Returns the entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[FailoverEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for FailoverLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Decode a failover log from the full contents of a `.fol` file.
///
/// Buffers shorter than one record decode to an empty log.
///
/// # Errors
///
/// Returns an error if an entry breaks the sequence ordering or a field
/// cannot be read.
pub fn decode_failover_log(data: &[u8]) -> CodecResult<FailoverLog> {
    let records = data.len() / FAILOVER_ENTRY_SIZE;
    let mut reader = RecordReader::new(data);
    let mut log = FailoverLog {
        entries: Vec::with_capacity(records),
    };

    for _ in 0..records {
        let seq = reader.read_u64(Field::FailoverSeqno)?;
        let uuid = reader.read_u64(Field::FailoverUuid)?;
        log.push(FailoverEntry::new(seq, uuid))?;
    }

    Ok(log)
}

impl Decode for FailoverLog {
    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        decode_failover_log(bytes)
    }
}
