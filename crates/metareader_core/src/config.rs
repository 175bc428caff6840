//! Run configuration.

use std::path::PathBuf;

/// How decoded records are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Emit one aggregated JSON document instead of text lines.
    pub structured: bool,
}

/// Configuration for a single read of a backup data directory.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory holding the metadata files.
    pub path: PathBuf,

    /// Optional filter expression restricting which vBuckets are read.
    pub filter: Option<String>,

    /// Output options.
    pub output: OutputOptions,
}

impl RunConfig {
    /// Creates a configuration that reads every matching file in `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            filter: None,
            output: OutputOptions::default(),
        }
    }

    /// Sets the filter expression.
    #[must_use]
    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filter = Some(expression.into());
        self
    }

    /// Sets the filter expression if one was given.
    #[must_use]
    pub fn filter_opt(mut self, expression: Option<String>) -> Self {
        self.filter = expression;
        self
    }

    /// Sets whether to emit structured output.
    #[must_use]
    pub const fn structured(mut self, value: bool) -> Self {
        self.output.structured = value;
        self
    }
}
