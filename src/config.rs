/*!
 * Configuration handling for projsnap
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;

/// Command-line arguments for projsnap
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "projsnap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy project structure and contents",
    long_about = "Walks a project directory, renders an indented tree plus the contents of recognized text files, copies the result to the system clipboard and saves it to a timestamped file."
)]
pub struct Args {
    /// Directory to process
    #[clap(required_unless_present = "generate")]
    pub directory: Option<String>,

    /// Maximum depth to traverse (-1 for unlimited)
    #[clap(long, default_value = "4")]
    pub depth: i32,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to snapshot
    pub target_dir: PathBuf,

    /// Ceiling on directory levels below the root, -1 for unlimited
    pub max_depth: i32,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory.unwrap_or_default()),
            max_depth: args.depth,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.target_dir.is_dir(),
            PathNotFound,
            "{}",
            self.target_dir.display()
        );
        crate::ensure!(
            self.max_depth >= -1,
            InvalidArgument,
            "depth must be -1 or a non-negative integer, got {}",
            self.max_depth
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_missing_directory() {
        let config = Config {
            target_dir: PathBuf::from("/definitely/not/a/real/path"),
            max_depth: 4,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Directory not found"));
    }

    #[test]
    fn test_validate_rejects_bad_depth() {
        let config = Config {
            target_dir: std::env::temp_dir(),
            max_depth: -2,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_validate_accepts_unlimited_depth() {
        let config = Config {
            target_dir: std::env::temp_dir(),
            max_depth: -1,
        };
        assert!(config.validate().is_ok());
    }
}
