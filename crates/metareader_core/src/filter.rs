//! vBucket filter expressions.
//!
//! A filter is a comma separated list of identifiers and ascending
//! ranges, e.g. `1-100,300`. Order is kept and duplicates are not removed.

use crate::error::FilterError;
use crate::types::{is_digits, VbId};

/// Largest `end - start` a single range token may span.
///
/// The vBucket space is 1024 wide; anything past this bound is a typo.
pub const MAX_RANGE_SPAN: u64 = 65_536;

/// Parse a filter expression into the identifiers it names.
///
/// # Errors
///
/// Returns [`FilterError::Empty`] for an empty expression and
/// [`FilterError::InvalidToken`] for the first token that is neither a
/// non-negative `u64` nor a range `A-B` with `A < B` spanning at most
/// [`MAX_RANGE_SPAN`].
///
/// # Example
///
/// ```
/// use metareader_core::parse_filter;
///
/// let ids: Vec<String> = parse_filter("1,3-5,9")
///     .unwrap()
///     .iter()
///     .map(|v| v.to_string())
///     .collect();
/// assert_eq!(ids, ["1", "3", "4", "5", "9"]);
/// ```
pub fn parse_filter(expression: &str) -> Result<Vec<VbId>, FilterError> {
    if expression.is_empty() {
        return Err(FilterError::Empty);
    }

    let mut vbids = Vec::new();
    for token in expression.split(',') {
        if let Some(vbid) = VbId::from_digits(token) {
            if parse_literal(token).is_none() {
                return Err(FilterError::invalid_token(token, "vbucket out of range"));
            }
            vbids.push(vbid);
            continue;
        }

        let (start, end) = parse_range(token)?;
        vbids.extend((start..=end).map(VbId::from));
    }

    Ok(vbids)
}

fn parse_range(token: &str) -> Result<(u64, u64), FilterError> {
    let parts: Vec<&str> = token.split('-').collect();
    let [start, end] = parts.as_slice() else {
        return Err(FilterError::invalid_token(token, "not a valid vbucket"));
    };

    let start = parse_literal(start)
        .ok_or_else(|| FilterError::invalid_token(token, format!("invalid range start: {start}")))?;
    let end = parse_literal(end)
        .ok_or_else(|| FilterError::invalid_token(token, format!("invalid range end: {end}")))?;

    if start >= end {
        return Err(FilterError::invalid_token(
            token,
            "range start must be smaller than range end",
        ));
    }

    if end.checked_sub(start).map_or(true, |span| span > MAX_RANGE_SPAN) {
        return Err(FilterError::invalid_token(token, "range too large"));
    }

    Ok((start, end))
}

fn parse_literal(text: &str) -> Option<u64> {
    if is_digits(text) {
        text.parse().ok()
    } else {
        None
    }
}
