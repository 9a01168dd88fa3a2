//! File scanning backend
//!
//! Expands root paths into the ordered list of files a run will read. Within a
//! directory, files come before subdirectories and both are sorted by name, so
//! the order is stable across runs.

use log::warn;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::paths::FormatFilter;

/// Collect candidate files under `roots`
pub fn collect_files(roots: &[PathBuf], filter: &FormatFilter, recursive: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for root in roots {
        if root.is_file() {
            if filter.accepts(root) {
                files.push(root.clone());
            }
        } else if root.is_dir() {
            walk_dir(root, filter, recursive, &mut files);
        } else {
            warn!("Skipping {}: no such file or directory", root.display());
        }
    }

    files
}

fn walk_dir(root: &Path, filter: &FormatFilter, recursive: bool, files: &mut Vec<PathBuf>) {
    let mut walker = WalkDir::new(root).min_depth(1).sort_by(files_first);
    if !recursive {
        walker = walker.max_depth(1);
    }

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() && filter.accepts(path) {
            files.push(entry.into_path());
        }
    }
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
