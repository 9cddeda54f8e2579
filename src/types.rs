/*!
 * Core types for the snapshot artifact
 */

use std::path::PathBuf;

/// Outcome of reading one content-eligible file.
///
/// Reading is attempted once per file; whichever way it goes, the outcome
/// becomes a block in the artifact and the scan moves on.
#[derive(Debug, Clone)]
pub enum ContentBlock {
    /// File body read as UTF-8 text
    Content {
        /// Path relative to the scan root
        path: PathBuf,
        /// Raw file body
        text: String,
    },
    /// File listed but not read: body exceeds the size ceiling
    Oversized {
        /// File name
        name: String,
        /// Size in bytes
        size: u64,
    },
    /// Metadata lookup or read failed
    ReadError {
        /// File name
        name: String,
        /// Underlying error message
        message: String,
    },
}

/// The snapshot artifact: tree lines plus per-file content blocks.
///
/// Invariant: every content-eligible file entry in `structure` has a block
/// in `blocks`, in the same traversal order.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Indented tree rendering, one line per directory or captured file
    pub structure: Vec<String>,
    /// Per-file blocks in traversal order
    pub blocks: Vec<ContentBlock>,
}
