//! File reading strategies
//!
//! Provides consistent handling for:
//! - Binary files (soft skip)
//! - Non-UTF-8 files (lossy or strict)
//! - Unreadable files

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes sampled for binary detection
pub const BINARY_SAMPLE_SIZE: usize = 8192;

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingStrategy {
    /// Skip non-UTF-8 files entirely
    Skip,
    /// Replace invalid sequences with U+FFFD
    #[default]
    Lossy,
}

/// Configuration for file reading
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReadConfig {
    /// How to handle non-UTF-8 content
    pub encoding_strategy: EncodingStrategy,
}

/// Why a file was left out of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Content is not textual
    Binary,
    /// Content is not valid UTF-8 and the strategy is strict
    InvalidEncoding,
    /// The file could not be opened or read
    Unreadable(String),
}

impl SkipReason {
    /// Soft skips are only reported in verbose mode
    pub fn is_soft(&self) -> bool {
        matches!(self, SkipReason::Binary)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Binary => write!(f, "not a text file"),
            SkipReason::InvalidEncoding => write!(f, "contains invalid UTF-8 sequences"),
            SkipReason::Unreadable(e) => write!(f, "cannot read file: {}", e),
        }
    }
}

/// Result of reading a file
#[derive(Debug, Clone)]
pub struct FileReadResult {
    /// The file content (if successfully read)
    pub content: Option<String>,

    /// Whether lossy conversion was used
    pub lossy_conversion: bool,

    /// Reason for skipping (if skipped)
    pub skip_reason: Option<SkipReason>,
}

impl FileReadResult {
    /// Create a successful read result
    pub fn success(content: String) -> Self {
        Self {
            content: Some(content),
            lossy_conversion: false,
            skip_reason: None,
        }
    }

    /// Create a skipped result
    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            content: None,
            lossy_conversion: false,
            skip_reason: Some(reason),
        }
    }

    /// Mark as lossy conversion
    pub fn with_lossy(mut self) -> Self {
        self.lossy_conversion = true;
        self
    }
}

/// A file is treated as binary when its leading sample contains a NUL byte
pub fn looks_binary(bytes: &[u8]) -> bool {
    let check_len = std::cmp::min(BINARY_SAMPLE_SIZE, bytes.len());
    bytes[..check_len].contains(&0)
}

/// Read a file with the given configuration
pub fn read_file_with_config(path: &Path, config: &FileReadConfig) -> FileReadResult {
    let bytes = match read_file_bytes(path) {
        Ok(b) => b,
        Err(e) => {
            return FileReadResult::skipped(SkipReason::Unreadable(e.to_string()));
        }
    };

    if looks_binary(&bytes) {
        return FileReadResult::skipped(SkipReason::Binary);
    }

    match String::from_utf8(bytes) {
        Ok(content) => FileReadResult::success(content),
        Err(err) => match config.encoding_strategy {
            EncodingStrategy::Skip => FileReadResult::skipped(SkipReason::InvalidEncoding),
            EncodingStrategy::Lossy => {
                let bytes = err.into_bytes();
                FileReadResult::success(String::from_utf8_lossy(&bytes).into_owned()).with_lossy()
            }
        },
    }
}

fn read_file_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = fs::File::open(path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut reader = std::io::BufReader::new(file);
    let mut buffer = Vec::with_capacity(file_size);
    reader.read_to_end(&mut buffer)?;

    Ok(buffer)
}
