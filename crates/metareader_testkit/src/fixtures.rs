//! Test fixtures for backup data directories.

use crate::vectors::{encode_failover_pairs, encode_snapshot};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary backup data directory with automatic cleanup.
pub struct BackupDir {
    temp_dir: TempDir,
}

impl BackupDir {
    /// Creates a new empty directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes raw bytes to `name` and returns the full path.
    pub fn write_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }

    /// Writes `snapshot_<vbid>.snp`.
    pub fn write_snapshot(&self, vbid: u64, start: u64, end: u64, seqno: u64) -> PathBuf {
        self.write_raw(
            &format!("snapshot_{vbid}.snp"),
            &encode_snapshot(start, end, seqno),
        )
    }

    /// Writes `failoverlog_<vbid>.fol` from `(seqno, uuid)` pairs.
    pub fn write_failover(&self, vbid: u64, pairs: &[(u64, u64)]) -> PathBuf {
        self.write_raw(
            &format!("failoverlog_{vbid}.fol"),
            &encode_failover_pairs(pairs),
        )
    }

    /// Creates a subdirectory named `name`.
    pub fn create_subdir(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::create_dir(&path).expect("Failed to create subdirectory");
        path
    }
}

impl Default for BackupDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a test with a temporary backup directory.
pub fn with_backup_dir<F, R>(f: F) -> R
where
    F: FnOnce(&BackupDir) -> R,
{
    let dir = BackupDir::new();
    f(&dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_named_files() {
        with_backup_dir(|dir| {
            let snap = dir.write_snapshot(3, 1, 2, 3);
            let fol = dir.write_failover(3, &[(1, 1)]);
            assert_eq!(snap.file_name().unwrap(), "snapshot_3.snp");
            assert_eq!(fs::read(&snap).unwrap().len(), 24);
            assert_eq!(fs::read(&fol).unwrap().len(), 16);
        });
    }
}
