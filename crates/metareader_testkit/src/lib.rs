//! # metareader testkit
//!
//! Test utilities for metareader.
//!
//! This crate provides:
//! - Temporary backup data directories populated with metadata files
//! - Byte encoders producing the on-disk record layouts
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use metareader_testkit::prelude::*;
//!
//! let dir = BackupDir::new();
//! dir.write_snapshot(7, 100, 200, 150);
//! assert!(dir.path().join("snapshot_7.snp").exists());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use vectors::*;
