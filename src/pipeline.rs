//
// pipeline.rs
// Dicom-Repair-rs
//
// Drives one repair run: scan the input, apply the rule chain, persist the survivors.
//
// Thales Matheus Mendonça Santos - August 2026

use std::path::Path;

use anyhow::Result;
use dicom::object::DefaultDicomObject;

use crate::repairs::RepairRule;
use crate::scanner::DicomScanner;
use crate::status::StatusSink;
use crate::storage::OutputStore;

/// Runs the repair chain over every DICOM file under `input_path`, writing
/// the surviving data sets to `output_path`.
///
/// Invalid files are skipped and rejected data sets are dropped, both with an
/// audit line through `status`. Filesystem faults abort the run; data sets
/// already written stay on disk.
pub fn perform_repairs(
    input_path: &Path,
    output_path: &Path,
    repair_methods: &[RepairRule],
    include_subdirectories: bool,
    status: &mut dyn StatusSink,
) -> Result<()> {
    let store = OutputStore::new(output_path)?;
    let mut scanner = DicomScanner::new(input_path, include_subdirectories);

    while let Some(dataset) = scanner.next_dataset(status)? {
        if let Some(repaired) = apply_rules(dataset, repair_methods, status) {
            let saved = store.save(&repaired)?;
            tracing::debug!("wrote {:?}", saved);
        }
    }

    Ok(())
}

/// Feeds the data set through the rules in order. A rejection by any rule
/// short-circuits the rest of the chain.
pub fn apply_rules(
    dataset: DefaultDicomObject,
    repair_methods: &[RepairRule],
    status: &mut dyn StatusSink,
) -> Option<DefaultDicomObject> {
    let mut dataset = dataset;
    for repair in repair_methods {
        dataset = repair(dataset, status)?;
    }
    Some(dataset)
}
