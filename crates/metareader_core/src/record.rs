//! Binding between decoded record types and their file domain.

use crate::types::Domain;
use metareader_codec::{Decode, FailoverLog, SnapshotMarker};
use serde::Serialize;

/// A record type the selection controller can read and render.
pub trait Record: Decode + Serialize {
    /// The file domain this record is stored in.
    const DOMAIN: Domain;

    /// Formats the record fields for a text line.
    fn text_fields(&self) -> String;
}

impl Record for FailoverLog {
    const DOMAIN: Domain = Domain::Failover;

    fn text_fields(&self) -> String {
        self.to_string()
    }
}

impl Record for SnapshotMarker {
    const DOMAIN: Domain = Domain::Snapshot;

    fn text_fields(&self) -> String {
        format!(
            "start: {} end: {} lastSeqNo: {}",
            self.start, self.end, self.seqno
        )
    }
}
