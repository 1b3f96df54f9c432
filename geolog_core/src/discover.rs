//! Recursive discovery of log files beneath a root directory.

use std::path::{Path, PathBuf};

/// Suffix selecting input files. Case-sensitive.
pub const LOG_EXTENSION: &str = ".log";

/// List every file under `root` whose name ends with [`LOG_EXTENSION`].
///
/// A missing or unreadable root yields an empty list; "no files found" is
/// the only outcome the caller distinguishes.
#[must_use]
pub fn find_log_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_log_files(root, &mut files);
    files
}

fn collect_log_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return; // Skip unreadable directories
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_log_files(&path, files);
        } else if entry.file_name().to_string_lossy().ends_with(LOG_EXTENSION) {
            files.push(path);
        }
    }
}
