//! `hh:mm` detection in free-text log lines.
//!
//! The rule is intentionally narrow: only the first colon on a line is
//! inspected, and it must sit inside a `DD:DD` window with two characters of
//! lead-in. Lines with a later, well-formed time after an earlier stray colon
//! do not match.

use std::io::BufRead;

use serde::Serialize;

use crate::timecode::TimeCode;

/// Extracts an `hh:mm` time code from a line, if the line carries one.
///
/// Hours and minutes are taken verbatim from the two digit groups, so `99:99`
/// is accepted and normalized to `100:39:0`. The line need not be UTF-8.
pub fn extract_time_code(line: impl AsRef<[u8]>) -> Option<TimeCode> {
    let bytes = line.as_ref();
    let pos = bytes.iter().position(|&b| b == b':')?;
    if pos < 2 || pos + 2 >= bytes.len() {
        return None;
    }

    let window = &bytes[pos - 2..=pos + 2];
    if !(window[0].is_ascii_digit()
        && window[1].is_ascii_digit()
        && window[3].is_ascii_digit()
        && window[4].is_ascii_digit())
    {
        return None;
    }

    let hours = two_digits(window[0], window[1]);
    let minutes = two_digits(window[3], window[4]);
    Some(TimeCode::new(hours, minutes, 0))
}

fn two_digits(tens: u8, ones: u8) -> u64 {
    u64::from(tens - b'0') * 10 + u64::from(ones - b'0')
}

/// Running totals for a scan over many lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Lines inspected, matching or not.
    pub lines_read: u64,
    /// Lines that carried a time code.
    pub matches: u64,
    /// Sum of every matched time code.
    pub total: TimeCode,
}

impl ScanSummary {
    /// Feeds one line. Returns the time code if the line matched.
    pub fn record(&mut self, line: impl AsRef<[u8]>) -> Option<TimeCode> {
        self.lines_read += 1;
        let found = extract_time_code(line)?;
        self.matches += 1;
        self.total += found;
        tracing::trace!(line = self.lines_read, time_code = %found, "matched time code");
        Some(found)
    }

    /// Mean of the matched time codes, or `None` when nothing matched.
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<TimeCode> {
        if self.matches == 0 {
            return None;
        }
        self.total.divide_by(self.matches as f64).ok()
    }
}

/// Scans every line of `reader`.
///
/// Lines are split on `\n` as raw bytes, so text in other encodings is
/// still scanned instead of failing the whole read.
pub fn scan_lines<R: BufRead>(reader: R) -> std::io::Result<ScanSummary> {
    let mut summary = ScanSummary::default();
    for line in reader.split(b'\n') {
        let line = line?;
        summary.record(line.strip_suffix(b"\r").unwrap_or(&line[..]));
    }
    tracing::debug!(
        lines_read = summary.lines_read,
        matches = summary.matches,
        "scan complete"
    );
    Ok(summary)
}
