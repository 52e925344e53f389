//
// lib.rs
// Dicom-Repair-rs
//
// Exposes the crate's modules and re-exports the repair entry points for both binary and library consumers.
//
// Thales Matheus Mendonça Santos - August 2026

// Public surface of the library: the repair pipeline and its collaborators.
pub mod cli;
pub mod dicom_access;
pub mod loader;
pub mod pipeline;
pub mod repairs;
pub mod scanner;
pub mod status;
pub mod storage;
pub mod summary;

pub use cli::{run as run_cli, Cli};
pub use pipeline::{apply_rules, perform_repairs};
pub use repairs::{RepairRule, REPAIR_METHODS};
pub use status::{RepairLog, StatusSink};
