//! Byte encoders for the on-disk record layouts.
//!
//! The tool itself never writes these files; tests use the encoders to
//! build inputs.

use metareader_codec::{FailoverEntry, FAILOVER_ENTRY_SIZE, SNAPSHOT_MARKER_SIZE};

/// Encodes failover entries as consecutive big-endian `[seqno][uuid]` pairs.
///
/// No ordering check is applied, so this can build invalid logs too.
#[must_use]
pub fn encode_failover_entries(entries: &[FailoverEntry]) -> Vec<u8> {
    let mut out = Vec::with_capacity(entries.len() * FAILOVER_ENTRY_SIZE);
    for entry in entries {
        out.extend_from_slice(&entry.seq.to_be_bytes());
        out.extend_from_slice(&entry.uuid.to_be_bytes());
    }
    out
}

/// Encodes `(seqno, uuid)` pairs as a failover log.
#[must_use]
pub fn encode_failover_pairs(pairs: &[(u64, u64)]) -> Vec<u8> {
    let entries: Vec<FailoverEntry> = pairs
        .iter()
        .map(|&(seq, uuid)| FailoverEntry::new(seq, uuid))
        .collect();
    encode_failover_entries(&entries)
}

/// Encodes a snapshot marker.
#[must_use]
pub fn encode_snapshot(start: u64, end: u64, seqno: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(SNAPSHOT_MARKER_SIZE);
    out.extend_from_slice(&start.to_be_bytes());
    out.extend_from_slice(&end.to_be_bytes());
    out.extend_from_slice(&seqno.to_be_bytes());
    out
}
