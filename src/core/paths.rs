//! Path utilities
//!
//! Display normalization and the extension allow-list applied during traversal.

use std::path::Path;

/// Display form of a path; only Windows separators are rewritten to '/'
pub fn normalize_path(path: &Path) -> String {
    let display = path.to_string_lossy();
    if cfg!(windows) {
        display.replace('\\', "/")
    } else {
        display.into_owned()
    }
}

/// Extension allow-list; an empty filter accepts every file
#[derive(Debug, Clone, Default)]
pub struct FormatFilter {
    suffixes: Vec<String>,
}

impl FormatFilter {
    /// Build a filter from user-supplied extensions (`txt`, `.md`, ...)
    pub fn new<S: AsRef<str>>(formats: &[S]) -> Self {
        let suffixes = formats
            .iter()
            .map(|f| f.as_ref().trim().trim_start_matches('.'))
            .filter(|f| !f.is_empty())
            .map(|f| format!(".{}", f))
            .collect();
        Self { suffixes }
    }

    /// Case-sensitive `*.<ext>` match on the file name
    pub fn accepts(&self, path: &Path) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }

        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }
}
