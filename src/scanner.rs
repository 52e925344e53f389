use std::path::Path;

use anyhow::{Context, Result};
use dicom::object::DefaultDicomObject;
use walkdir::WalkDir;

use crate::loader;
use crate::status::StatusSink;

/// Literal prefix of the per-file status line. Progress front-ends and the
/// run summary match on it, so it must not change.
pub const CHECKING_FILE_PREFIX: &str = "Checking file";

/// Lazy producer of the valid DICOM data sets under a directory.
///
/// Files are decoded one at a time as `next_dataset` is pulled; invalid files
/// are reported through the sink and skipped. The traversal is not
/// restartable.
pub struct DicomScanner {
    entries: walkdir::IntoIter,
}

impl DicomScanner {
    pub fn new(root: &Path, include_subdirectories: bool) -> Self {
        Self {
            entries: walk(root, include_subdirectories).into_iter(),
        }
    }

    /// Advances to the next valid data set, reporting every file checked
    /// along the way. `Ok(None)` means the traversal is exhausted.
    pub fn next_dataset(
        &mut self,
        status: &mut dyn StatusSink,
    ) -> Result<Option<DefaultDicomObject>> {
        for entry in self.entries.by_ref() {
            let entry = entry.context("Failed to walk input directory")?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            status.report(&format!(
                "{} {}",
                CHECKING_FILE_PREFIX,
                loader::display_name(path)
            ));
            if let Some(dataset) = loader::load_header(path, status)? {
                return Ok(Some(dataset));
            }
        }
        Ok(None)
    }
}

/// Counts the files a scan of `root` would visit.
///
/// A separate traversal, used to scale progress reporting before a run
/// starts; the scan itself never buffers the corpus.
pub fn count_files(root: &Path, include_subdirectories: bool) -> Result<usize> {
    let mut count = 0;
    for entry in walk(root, include_subdirectories) {
        let entry = entry.context("Failed to walk input directory")?;
        if entry.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}

fn walk(root: &Path, include_subdirectories: bool) -> WalkDir {
    let walker = WalkDir::new(root);
    if include_subdirectories {
        walker
    } else {
        walker.max_depth(1)
    }
}
