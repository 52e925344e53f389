//
// main.rs
// Dicom-Repair-rs
//
// Binary entry point that hands off execution to the CLI layer.
//
// Thales Matheus Mendonça Santos - August 2026

use dicom_repair::cli;

fn main() -> anyhow::Result<()> {
    // Delegate all argument parsing and the run itself to the CLI module.
    cli::run()
}
