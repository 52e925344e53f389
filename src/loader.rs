use std::borrow::Cow;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use dicom::object::{open_file, DefaultDicomObject, ReadError};

use crate::status::StatusSink;

/// Attempts to decode one file as DICOM.
///
/// Returns `Ok(None)` for files that do not hold a DICOM data set, reporting
/// the skip through the sink. Filesystem faults are returned as errors.
pub fn load_header(
    path: &Path,
    status: &mut dyn StatusSink,
) -> Result<Option<DefaultDicomObject>> {
    match open_file(path) {
        Ok(dataset) => Ok(Some(dataset)),
        Err(err) if is_io_failure(&err) => {
            Err(err).with_context(|| format!("Failed to read {:?}", path))
        }
        Err(_) => {
            status.report(&format!(
                "{} did not contain valid DICOM data.  Skipped.",
                display_name(path)
            ));
            Ok(None)
        }
    }
}

// A failure to open the file or a read fault below the parser is filesystem
// trouble. An unexpected EOF only means the bytes ran out before a complete
// data set appeared, which is how truncated non-DICOM files present.
fn is_io_failure(err: &ReadError) -> bool {
    match err {
        ReadError::OpenFile { .. } => true,
        ReadError::ReadFile { source, .. } => source.kind() != io::ErrorKind::UnexpectedEof,
        _ => false,
    }
}

/// Final path component, as shown in status messages.
pub(crate) fn display_name(path: &Path) -> Cow<'_, str> {
    path.file_name().unwrap_or(path.as_os_str()).to_string_lossy()
}
