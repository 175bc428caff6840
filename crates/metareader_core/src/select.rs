//! Selection controller.
//!
//! Decides which files to read (every match in the directory, or the
//! files named by a filter), reads and decodes each one, and collects
//! the per-file outcomes in processing order.

use crate::config::{OutputOptions, RunConfig};
use crate::error::{CoreError, CoreResult};
use crate::filter::parse_filter;
use crate::record::Record;
use crate::scan::scan;
use crate::types::VbId;
use metareader_codec::{CodecError, FailoverLog, SnapshotMarker};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};

/// What happened to one requested vBucket.
#[derive(Debug)]
pub enum Outcome<R> {
    /// The file was read and decoded.
    Decoded {
        /// vBucket identifier.
        vbid: VbId,
        /// The decoded record.
        record: R,
    },
    /// No file exists for a vBucket named by the filter.
    NotFound {
        /// vBucket identifier.
        vbid: VbId,
        /// Path that was looked up.
        path: PathBuf,
    },
    /// The file exists but could not be read.
    ReadFailed {
        /// vBucket identifier.
        vbid: VbId,
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        error: io::Error,
    },
    /// The file was read but its contents did not decode.
    DecodeFailed {
        /// vBucket identifier.
        vbid: VbId,
        /// Path of the file.
        path: PathBuf,
        /// Decoder error.
        error: CodecError,
    },
}

impl<R> Outcome<R> {
    /// Returns the vBucket this outcome belongs to.
    pub fn vbid(&self) -> &VbId {
        match self {
            Self::Decoded { vbid, .. }
            | Self::NotFound { vbid, .. }
            | Self::ReadFailed { vbid, .. }
            | Self::DecodeFailed { vbid, .. } => vbid,
        }
    }

    /// Returns the decoded record, if any.
    pub fn record(&self) -> Option<&R> {
        match self {
            Self::Decoded { record, .. } => Some(record),
            _ => None,
        }
    }
}

/// Ordered outcomes of one run.
#[derive(Debug)]
pub struct Report<R> {
    /// Outcomes in processing order.
    pub outcomes: Vec<Outcome<R>>,
}

impl<R: Record> Report<R> {
    /// Iterates over successfully decoded records with their identifiers.
    pub fn decoded(&self) -> impl Iterator<Item = (&VbId, &R)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            Outcome::Decoded { vbid, record } => Some((vbid, record)),
            _ => None,
        })
    }

    /// Returns the number of items that were not decoded.
    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.record().is_none())
            .count()
    }
}

/// Reads the files selected by `config` as records of type `R`.
///
/// # Errors
///
/// Fails before touching any file if the root path is missing or not a
/// directory, if the filter does not parse, or if the directory cannot be
/// listed. Problems with individual files are reported as [`Outcome`]s.
pub fn run<R: Record>(config: &RunConfig) -> CoreResult<Report<R>> {
    let domain = R::DOMAIN;
    let level = failure_level(config.output);
    validate_root(&config.path)?;
    info!("Reading {} files in {:?}", domain, config.path);

    let outcomes: Vec<Outcome<R>> = match &config.filter {
        Some(expression) => parse_filter(expression)?
            .into_iter()
            .map(|vbid| {
                let path = domain.file_path(&config.path, &vbid);
                if fs::metadata(&path).is_err() {
                    log_failure(
                        level,
                        format_args!("{} file for vbid ({}) could not be found", domain.name(), vbid),
                    );
                    return Outcome::NotFound { vbid, path };
                }
                load(vbid, path, level)
            })
            .collect(),
        None => scan(&config.path, domain)?
            .into_iter()
            .map(|file| load(file.vbid, file.path, level))
            .collect(),
    };

    let report = Report { outcomes };
    info!(
        "Processed {} {} files, {} failed",
        report.outcomes.len(),
        domain,
        report.failures()
    );
    Ok(report)
}

/// Reads failover logs.
///
/// # Errors
///
/// See [`run`].
pub fn run_failover(config: &RunConfig) -> CoreResult<Report<FailoverLog>> {
    run(config)
}

/// Reads snapshot markers.
///
/// # Errors
///
/// See [`run`].
pub fn run_snapshot(config: &RunConfig) -> CoreResult<Report<SnapshotMarker>> {
    run(config)
}

fn validate_root(path: &Path) -> CoreResult<()> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CoreError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_dir() {
        return Err(CoreError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Level for per-file failures.
///
/// Text output already carries a notice for every failure, so the log
/// only repeats it at debug level. Structured output drops the notices
/// and the log is the only place they show up.
fn failure_level(output: OutputOptions) -> Level {
    if output.structured {
        Level::WARN
    } else {
        Level::DEBUG
    }
}

fn log_failure(level: Level, message: std::fmt::Arguments<'_>) {
    if level == Level::WARN {
        warn!("{}", message);
    } else {
        debug!("{}", message);
    }
}

fn load<R: Record>(vbid: VbId, path: PathBuf, level: Level) -> Outcome<R> {
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(error) => {
            log_failure(level, format_args!("Error reading {:?}: {}", path, error));
            return Outcome::ReadFailed { vbid, path, error };
        }
    };

    match R::decode(&bytes) {
        Ok(record) => {
            debug!("Decoded {:?} ({} bytes)", path, bytes.len());
            Outcome::Decoded { vbid, record }
        }
        Err(error) => {
            log_failure(level, format_args!("Error decoding {:?}: {}", path, error));
            Outcome::DecodeFailed { vbid, path, error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use tempfile::TempDir;

    #[test]
    fn failures_log_at_warn_only_without_notices() {
        assert_eq!(failure_level(OutputOptions { structured: false }), Level::DEBUG);
        assert_eq!(failure_level(OutputOptions { structured: true }), Level::WARN);
    }

    #[test]
    fn missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = RunConfig::new(temp.path().join("nope"));
        assert!(matches!(
            run_snapshot(&config),
            Err(CoreError::PathNotFound { .. })
        ));
    }

    #[test]
    fn file_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("snapshot_1.snp");
        fs::write(&file, [0u8; 24]).unwrap();
        assert!(matches!(
            run_snapshot(&RunConfig::new(file)),
            Err(CoreError::NotADirectory { .. })
        ));
    }

    #[test]
    fn bad_filter_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = RunConfig::new(temp.path()).filter("1,abc");
        assert!(matches!(
            run_failover(&config),
            Err(CoreError::Filter(FilterError::InvalidToken { .. }))
        ));

        let config = RunConfig::new(temp.path()).filter("");
        assert!(matches!(
            run_failover(&config),
            Err(CoreError::Filter(FilterError::Empty))
        ));
    }

    #[test]
    fn empty_directory_yields_empty_report() {
        let temp = TempDir::new().unwrap();
        let report = run_failover(&RunConfig::new(temp.path())).unwrap();
        assert!(report.outcomes.is_empty());
        assert_eq!(report.failures(), 0);
    }

    #[test]
    fn directory_in_place_of_file_is_read_failure() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("snapshot_5.snp")).unwrap();
        let report = run_snapshot(&RunConfig::new(temp.path()).filter("5")).unwrap();
        assert!(matches!(
            report.outcomes.as_slice(),
            [Outcome::ReadFailed { .. }]
        ));
    }
}
