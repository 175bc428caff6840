//! Directory scanning.

use crate::error::CoreResult;
use crate::types::{Domain, VbId};
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A metadata file found in a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Identifier taken from the file name.
    pub vbid: VbId,
    /// Full path to the file.
    pub path: PathBuf,
}

/// Lists the files of `domain` in `dir`.
///
/// Entries are returned sorted by file name. Directories, names that do
/// not match `<prefix><digits><extension>` and entries that cannot be
/// inspected are skipped.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn scan(dir: &Path, domain: Domain) -> CoreResult<Vec<ScannedFile>> {
    let mut entries: Vec<DirEntry> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry in {:?}: {}", dir, e);
                None
            }
        })
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    let files = entries
        .into_iter()
        .filter_map(|entry| {
            let is_dir = entry.file_type().map(|t| t.is_dir());
            let vbid = match_entry(domain, &entry.file_name().to_string_lossy(), is_dir)?;
            Some(ScannedFile {
                vbid,
                path: entry.path(),
            })
        })
        .collect();

    Ok(files)
}

/// Decides whether a directory entry is a file of `domain`.
fn match_entry(domain: Domain, name: &str, is_dir: io::Result<bool>) -> Option<VbId> {
    let Some(vbid) = domain.match_file_name(name) else {
        debug!("Skipping {}: not a {} file", name, domain);
        return None;
    };

    match is_dir {
        Ok(false) => Some(vbid),
        Ok(true) => {
            debug!("Skipping directory {}", name);
            None
        }
        Err(e) => {
            debug!("Skipping {}: {}", name, e);
            None
        }
    }
}
