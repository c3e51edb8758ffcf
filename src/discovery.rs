//! Glob-based file discovery
//!
//! Walks a directory with `walkdir` and keeps the files whose path relative to
//! the root matches a `wax` glob. Results are sorted so "first match" is
//! deterministic across platforms.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

/// Files under `root` matching `pattern`, sorted by path
///
/// `max_depth` bounds the walk (1 = direct children only). A missing or
/// unreadable `root` yields an empty list.
pub fn glob_files(root: &Path, pattern: &str, max_depth: Option<usize>) -> Vec<PathBuf> {
    let Ok(glob) = Glob::new(pattern) else {
        return Vec::new();
    };

    let mut walker = WalkDir::new(root).min_depth(1);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut matches: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file() || entry.path_is_symlink())
        .filter(|entry| {
            let Ok(relative) = entry.path().strip_prefix(root) else {
                return false;
            };
            let relative = normalize_separators(relative);
            glob.matched(&CandidatePath::from(relative.as_str()))
                .is_some()
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    matches.sort();
    matches
}

/// Every entry (files and directories) under `root`, sorted
pub fn list_tree(root: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .map(walkdir::DirEntry::into_path)
        .collect();
    entries.sort();
    entries
}

/// Forward-slash rendering of a relative path
pub fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
