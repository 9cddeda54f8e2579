//! Global error handling for projsnap
//!
//! Centralized error type for validation and output failures. Per-file read
//! failures never reach this type; the scanner folds them into the snapshot
//! artifact itself.

use std::io;
use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for projsnap operations
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Clipboard-related errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Path not found
    #[error("Directory not found: {0}")]
    PathNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for projsnap operations
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Creates a SnapshotError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::SnapshotError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
