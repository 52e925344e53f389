//
// storage.rs
// Dicom-Repair-rs
//
// Persists repaired data sets under content-derived file names.
//
// Thales Matheus Mendonça Santos - August 2026

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dicom::object::DefaultDicomObject;

use crate::dicom_access::{ElementAccess, MODALITY, SOP_INSTANCE_UID};

/// Writer bound to one output directory. All outputs land flat in the root;
/// the input directory structure is not preserved.
pub struct OutputStore {
    root: PathBuf,
}

impl OutputStore {
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        // Create the output directory eagerly so saves do not fail mid-run.
        fs::create_dir_all(&root).context("Failed to create output directory")?;
        Ok(Self { root })
    }

    /// Writes the data set under its content-derived name and returns the
    /// landed path. Reruns overwrite.
    pub fn save(&self, dataset: &DefaultDicomObject) -> Result<PathBuf> {
        let filename = build_dicom_file_name(dataset)?;
        let path = self.root.join(filename);
        dataset
            .write_to_file(&path)
            .with_context(|| format!("Failed to write repaired file {:?}", path))?;
        Ok(path)
    }
}

/// Derives the output file name `<Modality><SOPInstanceUID>.dcm`, unique per
/// instance and stable across reruns.
///
/// A data set without both values cannot be named; by the time one reaches
/// the writer that is a defect, not routine input.
pub fn build_dicom_file_name(dataset: &DefaultDicomObject) -> Result<String> {
    let modality = dataset
        .element_str(MODALITY)
        .filter(|v| !v.is_empty())
        .context("Data set has no Modality value to build a file name from")?;
    let instance_uid = dataset
        .element_str(SOP_INSTANCE_UID)
        .filter(|v| !v.is_empty())
        .context("Data set has no SOP Instance UID value to build a file name from")?;
    Ok(format!("{}{}.dcm", modality, instance_uid))
}
