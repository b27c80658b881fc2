//! Scan command: average the `hh:mm` time codes in a text file.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use tc_core::{ScanSummary, scan_lines};

/// JSON shape of a scan result.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub path: String,
    pub lines_read: u64,
    pub matches: u64,
    /// Canonical `H:M:S`, absent when nothing matched.
    pub average: Option<String>,
    pub average_seconds: Option<u64>,
}

impl ScanReport {
    pub fn new(path: &Path, summary: &ScanSummary) -> Self {
        let average = summary.average();
        Self {
            path: path.display().to_string(),
            lines_read: summary.lines_read,
            matches: summary.matches,
            average: average.map(|tc| tc.to_string()),
            average_seconds: average.map(|tc| tc.total_seconds()),
        }
    }
}

pub fn run<W: Write>(writer: &mut W, path: &Path, json: bool) -> Result<()> {
    let file =
        File::open(path).with_context(|| format!("could not open file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "scanning for time codes");

    if json {
        let summary = read_summary(file, path)?;
        let report = ScanReport::new(path, &summary);
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(writer, "Opening file {}.", path.display())?;
    writeln!(writer, "Processing TimeCodes...")?;

    let summary = read_summary(file, path)?;
    match summary.average() {
        Some(average) => writeln!(writer, "Average TimeCode: {average}")?,
        None => writeln!(writer, "No valid TimeCodes found in the file.")?,
    }

    writeln!(writer, "Closing file {}.", path.display())?;
    Ok(())
}

fn read_summary(file: File, path: &Path) -> Result<ScanSummary> {
    scan_lines(BufReader::new(file)).with_context(|| format!("failed to read {}", path.display()))
}
