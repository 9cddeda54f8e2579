/*!
 * Post-run reporting for projsnap
 *
 * Summarizes what the snapshot captured, using the tabled library for
 * clean, consistent table rendering.
 */

use std::collections::HashMap;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::{ContentBlock, Snapshot};
use crate::utils::format_file_size;

/// Per-file figures shown in the report
#[derive(Debug, Clone, Default)]
pub struct FileReportInfo {
    /// Number of lines captured
    pub lines: usize,
    /// Number of characters captured
    pub chars: usize,
    /// Body size in bytes
    pub bytes: u64,
}

/// Figures for one snapshot run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Wall time for scan plus render
    pub duration: Duration,
    /// Files whose body made it into the artifact
    pub files_captured: usize,
    /// Files listed but skipped for size
    pub files_skipped: usize,
    /// Files that failed to read
    pub read_errors: usize,
    /// Total captured lines
    pub total_lines: usize,
    /// Total captured characters
    pub total_chars: usize,
    /// Rendered artifact size in bytes
    pub snapshot_bytes: u64,
    /// Per-file details keyed by relative path
    pub file_details: HashMap<String, FileReportInfo>,
}

impl ScanReport {
    /// Tally a finished snapshot
    pub fn from_snapshot(
        snapshot: &Snapshot,
        output_file: String,
        duration: Duration,
        snapshot_bytes: u64,
    ) -> Self {
        let mut report = Self {
            output_file,
            duration,
            files_captured: 0,
            files_skipped: 0,
            read_errors: 0,
            total_lines: 0,
            total_chars: 0,
            snapshot_bytes,
            file_details: HashMap::new(),
        };

        for block in &snapshot.blocks {
            match block {
                ContentBlock::Content { path, text } => {
                    let lines = text.lines().count();
                    let chars = text.chars().count();
                    report.files_captured += 1;
                    report.total_lines += lines;
                    report.total_chars += chars;
                    report.file_details.insert(
                        path.display().to_string(),
                        FileReportInfo {
                            lines,
                            chars,
                            bytes: text.len() as u64,
                        },
                    );
                }
                ContentBlock::Oversized { .. } => report.files_skipped += 1,
                ContentBlock::ReadError { .. } => report.read_errors += 1,
            }
        }

        report
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
}

/// Report generator for snapshot runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string for a finished run
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    // Truncate a path from the left, keeping the filename end visible
    fn format_path(&self, path: &str, max_len: usize) -> String {
        let chars: Vec<char> = path.chars().collect();
        if chars.len() <= max_len {
            return path.to_string();
        }

        let keep = max_len.saturating_sub(3);
        let tail: String = chars[chars.len() - keep..].iter().collect();
        format!("...{}", tail)
    }

    // Create the run summary table
    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = Vec::new();

        rows.push(SummaryRow {
            key: "📂 Output File".to_string(),
            value: report.output_file.clone(),
        });

        rows.push(SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        rows.push(SummaryRow {
            key: "📄 Files Captured".to_string(),
            value: self.format_number(report.files_captured),
        });

        if report.files_skipped > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Skipped (too large)".to_string(),
                value: self.format_number(report.files_skipped),
            });
        }

        if report.read_errors > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Read Errors".to_string(),
                value: self.format_number(report.read_errors),
            });
        }

        rows.push(SummaryRow {
            key: "📝 Total Lines".to_string(),
            value: self.format_number(report.total_lines),
        });

        rows.push(SummaryRow {
            key: "📏 Snapshot Size".to_string(),
            value: format_file_size(report.snapshot_bytes),
        });

        rows.push(SummaryRow {
            key: "📦 LLM Tokens".to_string(),
            value: format!(
                "{} tokens (estimated)",
                self.format_number(report.total_chars / 4)
            ),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create the captured-files table
    fn create_files_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        // largest first
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.chars.cmp(&a.chars));

        let files_to_show = if report.file_details.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                size: format_file_size(info.bytes),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate the console report: files table first, then the summary
    fn generate_console_report(&self, report: &ScanReport) -> String {
        let summary_table = self.create_summary_table(report);
        let files_table = self.create_files_table(report);

        let summary_title = "✅  SNAPSHOT COMPLETE";
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES"
        } else {
            "📋  CAPTURED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}
