/*!
 * Integration tests for the projsnap binary
 */

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::tempdir;

fn run_projsnap(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_projsnap"))
        .args(args)
        .output()
        .expect("failed to run projsnap")
}

// Pull the saved-file path out of the confirmation output
fn saved_path(stdout: &str) -> Option<PathBuf> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("2. Saved to file: ").map(PathBuf::from))
}

#[test]
fn test_missing_directory_exits_with_error() {
    let output = run_projsnap(&["/definitely/not/a/real/path"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory not found"));
}

#[test]
fn test_snapshot_run_writes_output_file() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("hello.py"), "print('hello')\n").unwrap();

    let output = run_projsnap(&[&temp.path().to_string_lossy(), "--depth", "2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Project structure and contents have been:"));

    let path = saved_path(&stdout).expect("no saved-file line in output");
    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("Directory Structure:"));
    assert!(saved.contains("File: hello.py"));
    assert!(saved.contains("print('hello')"));

    fs::remove_file(path).unwrap();
}

#[test]
#[ignore] // requires a running tmux session
          // to run manually: cargo test --test cli_integration -- --ignored
fn test_clipboard_matches_saved_file() {
    if env::var("TMUX").is_err() {
        return;
    }

    let temp = tempdir().unwrap();
    fs::write(temp.path().join("clip.py"), "x = 'clipboard'\n").unwrap();

    let output = run_projsnap(&[&temp.path().to_string_lossy()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. Copied to clipboard"));

    let path = saved_path(&stdout).expect("no saved-file line in output");
    let saved = fs::read_to_string(&path).unwrap();

    // the tmux paste buffer should hold exactly what was saved
    let buffer = Command::new("tmux").args(["show-buffer"]).output().unwrap();
    assert_eq!(saved, String::from_utf8_lossy(&buffer.stdout));

    fs::remove_file(path).unwrap();
}
