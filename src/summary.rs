//
// summary.rs
// Dicom-Repair-rs
//
// Aggregates a run's repair log into the completion report.
//
// Thales Matheus Mendonça Santos - August 2026

use crate::scanner::CHECKING_FILE_PREFIX;

/// Renders the end-of-run report: the number of files analyzed, then every
/// distinct repair line with its occurrence count, in first-seen order.
///
/// Per-file "Checking file" lines are counted rather than listed, and the
/// "Found N files" line is dropped entirely.
pub fn count_repairs(repair_log: &[String]) -> String {
    let mut file_count = 0usize;
    let mut grouped: Vec<(String, usize)> = Vec::new();

    for line in repair_log {
        if line.starts_with(CHECKING_FILE_PREFIX) {
            file_count += 1;
            continue;
        }
        if line.starts_with("Found ") {
            continue;
        }
        let line = line.replace(['\r', '\n'], " ");
        match grouped.iter().position(|(seen, _)| seen == &line) {
            Some(idx) => grouped[idx].1 += 1,
            None => grouped.push((line, 1)),
        }
    }

    let mut report = vec![
        String::new(),
        "********  DICOM File Repair Completed  ********".to_string(),
        format!("\nNumber of files analyzed:\t{}", file_count),
        "Repairs Made:".to_string(),
    ];
    for (line, count) in &grouped {
        let (found, action) = match line.split_once('\t') {
            Some((found, action)) => (found, action),
            None => (line.as_str(), ""),
        };
        report.push(format!(
            "\tIn {} files, \n\t\t{}\n\t\t{}",
            count, found, action
        ));
    }

    report.join("\n")
}
