/*!
 * Clipboard support for projsnap
 *
 * Copies the rendered snapshot to the system clipboard by piping it to
 * whichever platform clipboard command is available. tmux gets first pick
 * when a session is active; after that the platform's native mechanism.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the clipboard command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Platform clipboard commands, tried in order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Provider {
    /// tmux paste buffer
    Tmux,
    /// Wayland clipboard
    Wayland,
    /// X11 clipboard via xsel
    Xsel,
    /// X11 clipboard via xclip
    Xclip,
    /// macOS clipboard
    MacOs,
    /// Windows clipboard (native or via WSL)
    Windows,
    /// Termux clipboard
    Termux,
}

impl Provider {
    /// Command and arguments that read the clipboard payload from stdin
    fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Self::Wayland => ("wl-copy", &[]),
            Self::Xsel => ("xsel", &["-b", "-i"]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Self::MacOs => ("pbcopy", &[]),
            Self::Windows => ("clip.exe", &[]),
            Self::Termux => ("termux-clipboard-set", &[]),
        }
    }

    /// Pipe `text` into this provider's command
    fn copy(self, text: &str) -> Result<()> {
        let (cmd, args) = self.command();

        let mut child = Command::new(cmd)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::CommandFailed(format!("failed to spawn {}: {}", cmd, e)))?;

        child
            .stdin
            .as_mut()
            .ok_or_else(|| ClipboardError::CommandFailed(format!("no stdin for {}", cmd)))?
            .write_all(text.as_bytes())?;

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed(format!(
                "{} exited with status: {}",
                cmd, status
            )))
        }
    }
}

/// Copy text to the system clipboard.
///
/// Picks the first candidate provider whose command exists on PATH and
/// pipes the text into it.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    for provider in candidate_providers() {
        let (cmd, _) = provider.command();
        if command_exists(cmd) {
            return provider.copy(text);
        }
    }

    Err(ClipboardError::NoClipboardFound)
}

/// Check whether a command is available on PATH
pub fn command_exists(command: &str) -> bool {
    if let Ok(paths) = env::var("PATH") {
        for dir in paths.split(':') {
            if Path::new(dir).join(command).exists() {
                return true;
            }
        }
    }
    false
}

/// Candidate providers for the current platform, best first
fn candidate_providers() -> Vec<Provider> {
    let mut providers = Vec::new();

    // inside a tmux session the paste buffer is the least surprising target
    if env::var("TMUX").is_ok() {
        providers.push(Provider::Tmux);
    }

    if cfg!(target_os = "macos") {
        providers.push(Provider::MacOs);
    } else if cfg!(target_os = "windows") {
        providers.push(Provider::Windows);
    } else if cfg!(target_os = "android") {
        providers.push(Provider::Termux);
    } else {
        if env::var("WSL_DISTRO_NAME").is_ok() {
            providers.push(Provider::Windows);
        }
        providers.push(Provider::Wayland);
        providers.push(Provider::Xsel);
        providers.push(Provider::Xclip);
    }

    providers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(command_exists("ls"));
        assert!(command_exists("echo"));
        assert!(!command_exists("nonexistentcommandxyz"));
    }

    #[test]
    fn test_candidate_providers_ordering() {
        let providers = candidate_providers();

        // tmux, when present, always goes first
        if env::var("TMUX").is_ok() {
            assert_eq!(providers.first(), Some(&Provider::Tmux));
        } else {
            assert!(!providers.contains(&Provider::Tmux));
        }
    }
}
