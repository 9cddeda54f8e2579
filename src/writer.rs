/*!
 * Text rendering and file output for snapshots
 *
 * The rendered format is the tool's only wire format and is reproduced
 * verbatim: a "Directory Structure:" section with the tree lines, then a
 * "File Contents:" section with one framed block per captured file.
 */

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::types::{ContentBlock, Snapshot};

/// Width of the separator line framing each file body.
const SEPARATOR_WIDTH: usize = 40;

/// Render a snapshot into the pasteable text artifact.
pub fn render(snapshot: &Snapshot) -> String {
    let mut lines: Vec<String> =
        Vec::with_capacity(snapshot.structure.len() + snapshot.blocks.len() * 6 + 4);

    lines.push("Directory Structure:".to_string());
    lines.extend(snapshot.structure.iter().cloned());

    lines.push(String::new());
    lines.push("File Contents:".to_string());
    lines.push(String::new());

    for block in &snapshot.blocks {
        push_block_lines(&mut lines, block);
    }

    lines.join("\n")
}

/// Write the rendered snapshot to `project_structure_<YYYYMMDD_HHMMSS>.txt`
/// next to the executable, falling back to the current directory when the
/// executable path cannot be resolved. Returns the path written.
pub fn write_timestamped(text: &str) -> io::Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let file_name = format!("project_structure_{}.txt", stamp);

    let dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let path = dir.join(file_name);
    fs::write(&path, text)?;
    Ok(path)
}

/// Append the lines for one content block.
fn push_block_lines(lines: &mut Vec<String>, block: &ContentBlock) {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    match block {
        ContentBlock::Content { path, text } => {
            lines.push(String::new());
            lines.push(format!("File: {}", path.display()));
            lines.push(separator.clone());
            lines.push(text.clone());
            lines.push(separator);
            lines.push(String::new());
        }
        ContentBlock::Oversized { name, size } => {
            lines.push(String::new());
            lines.push(format!(
                "File: {} (skipped - too large, {:.1}KB)",
                name,
                *size as f64 / 1024.0
            ));
            lines.push(String::new());
        }
        // no leading blank line here, the error line stands in for the header
        ContentBlock::ReadError { name, message } => {
            lines.push(format!("Error reading {}: {}", name, message));
            lines.push(String::new());
        }
    }
}
