//! Snapshot marker records.

use crate::error::{CodecResult, Field};
use crate::reader::{RecordReader, FIELD_SIZE};
use crate::Decode;
use serde::Serialize;

/// Size of a snapshot marker on disk.
pub const SNAPSHOT_MARKER_SIZE: usize = 3 * FIELD_SIZE;

/// The sequence-number range covered by the latest backup snapshot of a
/// vBucket.
///
/// `start <= end` is expected but not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotMarker {
    /// First sequence number of the snapshot.
    pub start: u64,
    /// Last sequence number of the snapshot.
    pub end: u64,
    /// Last sequence number actually backed up.
    #[serde(rename = "seqNo")]
    pub seqno: u64,
}

/// Decode a snapshot marker from the full contents of a `.snp` file.
///
/// Bytes past the first record are ignored.
///
/// # Errors
///
/// Returns [`crate::CodecError::RecordRead`] naming the first field that
/// could not be read in full.
pub fn decode_snapshot(data: &[u8]) -> CodecResult<SnapshotMarker> {
    let mut reader = RecordReader::new(data);
    let start = reader.read_u64(Field::SnapshotStart)?;
    let end = reader.read_u64(Field::SnapshotEnd)?;
    let seqno = reader.read_u64(Field::SnapshotSeqno)?;
    Ok(SnapshotMarker { start, end, seqno })
}

impl Decode for SnapshotMarker {
    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        decode_snapshot(bytes)
    }
}
