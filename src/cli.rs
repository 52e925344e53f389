//
// cli.rs
// Dicom-Repair-rs
//
// Defines the CLI surface with Clap and drives a full repair run from the terminal.
//
// Thales Matheus Mendonça Santos - August 2026

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::pipeline;
use crate::repairs::REPAIR_METHODS;
use crate::scanner::{self, CHECKING_FILE_PREFIX};
use crate::status::{RepairLog, StatusSink};
use crate::summary;

/// Command-line interface: a single verb that runs the whole repair pass.
#[derive(Parser)]
#[command(name = "dicom-repair")]
#[command(about = "Reparo de metadados DICOM em Rust", long_about = None)]
pub struct Cli {
    /// Directory scanned for DICOM files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory receiving the repaired files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Check only the files at the top level of the input directory
    #[arg(long)]
    pub skip_subdirectories: bool,

    /// Save the full run log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let include_subdirectories = !cli.skip_subdirectories;
    tracing::debug!(
        "repairing {:?} into {:?} (subdirectories: {})",
        cli.input,
        cli.output,
        include_subdirectories
    );

    // The corpus is walked once up front so the progress bar knows its length.
    let file_count = scanner::count_files(&cli.input, include_subdirectories)?;

    let mut reporter = ConsoleReporter::new(file_count);
    reporter.report(&format!("Found {} files", file_count));

    pipeline::perform_repairs(
        &cli.input,
        &cli.output,
        REPAIR_METHODS,
        include_subdirectories,
        &mut reporter,
    )?;

    let report = summary::count_repairs(reporter.entries());
    reporter.report(&report);

    let log = reporter.finish();
    if let Some(path) = cli.log_file.as_deref() {
        log.save_to(path)?;
        println!("Log salvo em: {:?}", path);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Echoes every pipeline message to the console, advances the progress bar on
/// per-file lines, and accumulates the run log for the summary and `--log-file`.
struct ConsoleReporter {
    log: RepairLog,
    progress: ProgressBar,
}

impl ConsoleReporter {
    fn new(file_count: usize) -> Self {
        let progress =
            ProgressBar::with_draw_target(Some(file_count as u64), ProgressDrawTarget::stdout());
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40.cyan/white} {pos}/{len} arquivos")
        {
            progress.set_style(style);
        }
        Self {
            log: RepairLog::new(),
            progress,
        }
    }

    fn entries(&self) -> &[String] {
        self.log.entries()
    }

    fn finish(self) -> RepairLog {
        self.progress.finish_and_clear();
        self.log
    }
}

impl StatusSink for ConsoleReporter {
    fn report(&mut self, message: &str) {
        if message.starts_with(CHECKING_FILE_PREFIX) {
            self.progress.inc(1);
        }
        if self.progress.is_hidden() {
            println!("{}", message);
        } else {
            // Keep the bar pinned to the bottom while messages scroll above it.
            self.progress.println(message);
        }
        self.log.report(message);
    }
}
