/*!
 * Command-line interface for projsnap
 */

use std::io;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use projsnap::clipboard;
use projsnap::config::{Args, Config};
use projsnap::report::{ReportFormat, Reporter, ScanReport};
use projsnap::scanner::Scanner;
use projsnap::utils::count_files;
use projsnap::writer;
use projsnap::Result;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Shell completion generation short-circuits the scan
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    if let Err(e) = run(args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;

    // Progress bar sized by a cheap pre-count of eligible files
    let progress = ProgressBar::new(count_files(&config.target_dir, &config));
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📸 Snapshot");
    progress.set_message(format!("Scanning {}", config.target_dir.display()));

    let start_time = Instant::now();

    // Scan and render
    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let snapshot = scanner.scan();
    let text = writer::render(&snapshot);

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    // Dispose of the artifact: clipboard first, then the timestamped file.
    // A missing clipboard mechanism downgrades to a warning so headless
    // runs still produce the file.
    let copied = match clipboard::copy_to_clipboard(&text) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: could not copy to clipboard: {}", e);
            false
        }
    };

    let output_path = writer::write_timestamped(&text)?;

    println!("Project structure and contents have been:");
    if copied {
        println!("1. Copied to clipboard");
    }
    println!("2. Saved to file: {}", output_path.display());

    // Post-run summary
    let report = ScanReport::from_snapshot(
        &snapshot,
        output_path.display().to_string(),
        duration,
        text.len() as u64,
    );
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}
