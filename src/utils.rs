/*!
 * Utility functions for projsnap
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::policy::FilterPolicy;

/// Count content-eligible files for progress tracking.
///
/// Mirrors the scan's pruning: ignored directories are never entered and the
/// depth ceiling applies. A file at walkdir depth `d` lives in a directory
/// at level `d - 1`, hence the `+ 1` on the ceiling.
pub fn count_files(dir: &Path, config: &Config) -> u64 {
    let policy = FilterPolicy::default();

    let mut walker = WalkDir::new(dir);
    if config.max_depth >= 0 {
        walker = walker.max_depth(config.max_depth as usize + 1);
    }

    walker
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 {
                return true;
            }
            if e.path().is_dir() {
                !policy.ignores_dir(&e.file_name().to_string_lossy())
            } else {
                true
            }
        })
        .filter_map(Result::ok)
        .filter(|e| !e.path().is_dir())
        .filter(|e| policy.is_content_eligible(&e.file_name().to_string_lossy()))
        .count() as u64
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
