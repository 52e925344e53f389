//
// status.rs
// Dicom-Repair-rs
//
// Defines the status reporting contract threaded through the pipeline and the in-memory repair log.
//
// Thales Matheus Mendonça Santos - August 2026

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

/// Receives one plain-text line per reportable event during a repair run.
///
/// Every stage of the pipeline borrows the same sink, so one run produces one
/// linear audit log regardless of which component reported what.
pub trait StatusSink {
    fn report(&mut self, message: &str);
}

// Plain closures are accepted anywhere a sink is expected.
impl<F: FnMut(&str)> StatusSink for F {
    fn report(&mut self, message: &str) {
        self(message)
    }
}

/// Append-only log of one repair run.
#[derive(Debug, Default)]
pub struct RepairLog {
    entries: Vec<String>,
}

impl RepairLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the collected lines to `path` under a timestamped header.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let mut contents = format!(
            "DICOM File Repair Log - {}\n",
            Local::now().format("%Y-%m-%d %H:%M")
        );
        for line in &self.entries {
            contents.push_str(line);
            contents.push('\n');
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write repair log to {:?}", path))?;
        Ok(())
    }
}

impl StatusSink for RepairLog {
    fn report(&mut self, message: &str) {
        self.entries.push(message.to_string());
    }
}
