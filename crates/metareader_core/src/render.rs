//! Output rendering.
//!
//! Text mode writes per-item notices first, then one line per decoded
//! record. Structured mode writes a single JSON document keyed by vBucket
//! and leaves failed items out of it.

use crate::config::OutputOptions;
use crate::error::CoreResult;
use crate::record::Record;
use crate::select::{Outcome, Report};
use crate::types::{Domain, VbId};
use std::collections::BTreeMap;
use std::io::Write;

/// Writes `report` to `out` in the mode selected by `options`.
///
/// # Errors
///
/// Returns an error if writing fails or the structured document cannot be
/// serialized.
pub fn render<R: Record, W: Write>(
    report: &Report<R>,
    options: OutputOptions,
    out: &mut W,
) -> CoreResult<()> {
    if options.structured {
        render_structured(report, out)
    } else {
        render_text(report, out)
    }
}

/// Writes notices and record lines.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render_text<R: Record, W: Write>(report: &Report<R>, out: &mut W) -> CoreResult<()> {
    let mut lines = Vec::new();
    for outcome in &report.outcomes {
        match outcome {
            Outcome::Decoded { vbid, record } => lines.push(text_line(vbid, record)),
            other => {
                if let Some(message) = notice(R::DOMAIN, other) {
                    writeln!(out, "{message}")?;
                }
            }
        }
    }

    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Writes one JSON document holding every decoded record.
///
/// # Errors
///
/// Returns [`crate::CoreError::Serialization`] if the document cannot be
/// serialized or written.
pub fn render_structured<R: Record, W: Write>(report: &Report<R>, out: &mut W) -> CoreResult<()> {
    let records: BTreeMap<&str, &R> = report
        .decoded()
        .map(|(vbid, record)| (vbid.as_str(), record))
        .collect();

    let mut document = BTreeMap::new();
    document.insert(R::DOMAIN.document_key(), records);

    serde_json::to_writer(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

/// Formats a decoded record as a text line.
pub fn text_line<R: Record>(vbid: &VbId, record: &R) -> String {
    let fields = record.text_fields();
    if fields.is_empty() {
        format!("({} {})", R::DOMAIN.label(), vbid)
    } else {
        format!("({} {}) {}", R::DOMAIN.label(), vbid, fields)
    }
}

/// Formats the diagnostic for an item that was not decoded.
pub fn notice<R>(domain: Domain, outcome: &Outcome<R>) -> Option<String> {
    match outcome {
        Outcome::Decoded { .. } => None,
        Outcome::NotFound { vbid, .. } => Some(format!(
            "{} file for vbid ({}) could not be found",
            domain.name(),
            vbid
        )),
        Outcome::ReadFailed { vbid, error, .. } => Some(format!(
            "Error reading {}: {}",
            domain.file_name(vbid),
            error
        )),
        Outcome::DecodeFailed { vbid, error, .. } => Some(format!(
            "Error decoding {}: {}",
            domain.file_name(vbid),
            error
        )),
    }
}
