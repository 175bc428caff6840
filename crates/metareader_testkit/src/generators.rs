//! Property-based test generators using proptest.

use metareader_codec::FailoverEntry;
use proptest::prelude::*;

/// Strategy for failover histories with non-decreasing sequence numbers.
pub fn failover_entries_strategy(max_len: usize) -> impl Strategy<Value = Vec<FailoverEntry>> {
    prop::collection::vec((any::<u64>(), any::<u64>()), 0..=max_len).prop_map(|mut pairs| {
        pairs.sort_by_key(|&(seq, _)| seq);
        pairs
            .into_iter()
            .map(|(seq, uuid)| FailoverEntry::new(seq, uuid))
            .collect()
    })
}

/// Strategy for ascending filter ranges `(start, end)` with `start < end`.
pub fn vbucket_range_strategy(max_span: u64) -> impl Strategy<Value = (u64, u64)> {
    (0u64..4096, 1..=max_span.max(1)).prop_map(|(start, span)| (start, start + span))
}

/// Strategy for vBucket identifiers in the usual 0..1024 space.
pub fn vbid_strategy() -> impl Strategy<Value = u64> {
    0u64..1024
}
