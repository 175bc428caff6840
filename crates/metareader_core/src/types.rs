//! Core type definitions for metareader.

use std::fmt;
use std::path::{Path, PathBuf};

/// A vBucket identifier as it appears in file names and filters.
///
/// Kept as decimal text: an identifier typed in a filter is looked up
/// verbatim, so `007` and `7` name different files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VbId(String);

impl VbId {
    /// Creates an identifier from a run of ASCII digits.
    ///
    /// Returns `None` if `text` is empty or contains anything but digits.
    #[must_use]
    pub fn from_digits(text: &str) -> Option<Self> {
        if is_digits(text) {
            Some(Self(text.to_string()))
        } else {
            None
        }
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for VbId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for VbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// The kind of metadata file being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// `failoverlog_<vbid>.fol` files.
    Failover,
    /// `snapshot_<vbid>.snp` files.
    Snapshot,
}

impl Domain {
    /// File name prefix before the identifier.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Failover => "failoverlog_",
            Self::Snapshot => "snapshot_",
        }
    }

    /// File name suffix after the identifier.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Failover => ".fol",
            Self::Snapshot => ".snp",
        }
    }

    /// Label used in front of the identifier on text lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Failover => "vbid",
            Self::Snapshot => "vBucket",
        }
    }

    /// Top-level key of the structured document.
    #[must_use]
    pub const fn document_key(self) -> &'static str {
        match self {
            Self::Failover => "failoverLogs",
            Self::Snapshot => "snapshots",
        }
    }

    /// Human name used in notices.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Failover => "Failover log",
            Self::Snapshot => "Snapshot",
        }
    }

    /// Builds the file name for `vbid`.
    #[must_use]
    pub fn file_name(self, vbid: &VbId) -> String {
        format!("{}{}{}", self.prefix(), vbid, self.extension())
    }

    /// Builds the expected path of the file for `vbid` inside `dir`.
    #[must_use]
    pub fn file_path(self, dir: &Path, vbid: &VbId) -> PathBuf {
        dir.join(self.file_name(vbid))
    }

    /// Extracts the identifier from a file name of this domain.
    ///
    /// The name must be exactly prefix, one or more digits, extension.
    #[must_use]
    pub fn match_file_name(self, name: &str) -> Option<VbId> {
        let digits = name
            .strip_prefix(self.prefix())?
            .strip_suffix(self.extension())?;
        VbId::from_digits(digits)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failover => f.write_str("failoverlog"),
            Self::Snapshot => f.write_str("snapshot"),
        }
    }
}
