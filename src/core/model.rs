//! Run model
//!
//! Options shared by every stage of a counting run, and the fatal error
//! taxonomy that aborts one.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::core::file_reader::EncodingStrategy;
use crate::core::render::ReportFormat;

/// Default run-wide timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// A single matched unit of text
pub type Token = String;

/// Where the report is written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Build a target from an optional `--output` path
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        }
    }
}

/// Configuration for one run, built once at startup
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Strip whitespace before matching (subject to the active rule)
    pub ignore_whitespace: bool,

    /// Lowercase content before matching
    pub ignore_case: bool,

    /// Extension allow-list; empty accepts every file
    pub formats: Vec<String>,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Ascending count order
    pub reverse: bool,

    /// Keep only the first N ranked entries (0 = all)
    pub top_n: usize,

    /// Add a percent column
    pub show_percent: bool,

    /// Run-wide wall-clock bound
    pub timeout: Duration,

    /// Per-file diagnostics
    pub verbose: bool,

    pub output: OutputTarget,

    pub report_format: ReportFormat,

    /// How invalid UTF-8 is handled
    pub encoding: EncodingStrategy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ignore_whitespace: true,
            ignore_case: false,
            formats: Vec::new(),
            recursive: false,
            reverse: false,
            top_n: 0,
            show_percent: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verbose: false,
            output: OutputTarget::Stdout,
            report_format: ReportFormat::Tsv,
            encoding: EncodingStrategy::Lossy,
        }
    }
}

/// Errors that abort the whole run
#[derive(Debug, Error)]
pub enum CharfreqError {
    /// Conflicting or invalid options, detected before any file is read
    #[error("{0}")]
    Config(String),

    /// The run exceeded its wall-clock bound
    #[error("timed out after {}s, no report written", .limit.as_secs())]
    Timeout { limit: Duration },

    /// The report destination could not be opened
    #[error("cannot open output file {}", .path.display())]
    OutputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CharfreqError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        CharfreqError::Config(message.into())
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CharfreqError::Config(_) | CharfreqError::Timeout { .. } => 1,
            CharfreqError::OutputIo { .. } => 2,
        }
    }
}
