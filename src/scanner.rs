/*!
 * Directory traversal and snapshot assembly
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::policy::FilterPolicy;
use crate::types::{ContentBlock, Snapshot};

/// Files above this size are listed in the tree but their body is never read.
pub const MAX_CONTENT_BYTES: u64 = 100 * 1024;

/// One indentation unit in the tree rendering, four characters wide.
const INDENT_UNIT: &str = "│   ";

/// Walks the target directory and builds the snapshot artifact.
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Fixed filter rules
    policy: FilterPolicy,
    /// Progress bar, display-only
    progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            policy: FilterPolicy::default(),
            progress,
        }
    }

    /// Build the snapshot for the configured root and depth ceiling.
    ///
    /// Pure apart from filesystem reads: per-file failures become blocks in
    /// the artifact and never abort the scan. An unreadable root yields a
    /// snapshot containing only the root entry.
    pub fn scan(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot
            .structure
            .push(format!("{}/", dir_label(&self.config.target_dir)));
        self.scan_directory(&self.config.target_dir, Path::new(""), 0, &mut snapshot);
        snapshot
    }

    /// Process one directory: its files first, then its subdirectories.
    ///
    /// `level` is the directory's own depth below the root (root = 0).
    fn scan_directory(&self, abs_path: &Path, rel_path: &Path, level: usize, snapshot: &mut Snapshot) {
        let entries: Vec<DirEntry> = WalkDir::new(abs_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .collect();

        let (dirs, files): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|e| e.path().is_dir());

        let indent = INDENT_UNIT.repeat(level);

        for entry in files {
            let name = entry.file_name().to_string_lossy().to_string();
            if self.policy.excludes_file(&name) {
                continue;
            }
            if !self.policy.includes_file(&name) {
                continue;
            }

            snapshot.structure.push(format!("{}├── {}", indent, name));
            let block = self.process_file(entry.path(), &rel_path.join(&name), &name);
            snapshot.blocks.push(block);
        }

        for entry in dirs {
            let name = entry.file_name().to_string_lossy().to_string();
            if self.policy.ignores_dir(&name) {
                continue;
            }

            // symlinked directories are never visited by the walk
            if entry.path_is_symlink() {
                continue;
            }

            let child_level = level + 1;
            if self.config.max_depth >= 0 && child_level > self.config.max_depth as usize {
                continue;
            }

            // the branch glyph replaces the last indent unit of the child's
            // own indentation, so the parent's indent is reused here
            snapshot
                .structure
                .push(format!("{}├── {}/", indent, name));

            self.scan_directory(entry.path(), &rel_path.join(&name), child_level, snapshot);
        }
    }

    /// Resolve one eligible file into its content block.
    fn process_file(&self, abs_path: &Path, rel_path: &Path, name: &str) -> ContentBlock {
        self.progress.inc(1);
        self.progress.set_message(name.to_string());

        let size = match fs::metadata(abs_path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                return ContentBlock::ReadError {
                    name: name.to_string(),
                    message: e.to_string(),
                }
            }
        };

        if size > MAX_CONTENT_BYTES {
            return ContentBlock::Oversized {
                name: name.to_string(),
                size,
            };
        }

        match fs::read_to_string(abs_path) {
            Ok(text) => ContentBlock::Content {
                path: rel_path.to_path_buf(),
                text,
            },
            Err(e) => ContentBlock::ReadError {
                name: name.to_string(),
                message: e.to_string(),
            },
        }
    }
}

/// Label for the root entry: the directory's own name, `"."` when the path
/// has no final component.
fn dir_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
