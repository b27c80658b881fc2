//! Core domain logic for time codes.
//!
//! This crate contains:
//! - `TimeCode`: a whole-second duration with normalizing construction,
//!   checked arithmetic and `H:M:S` rendering
//! - Scanning: pulling `hh:mm` time codes out of free-text lines and averaging them
//! - Drying: countdown tracking for objects whose drying time follows surface area

pub mod drying;
pub mod scan;
mod timecode;

pub use drying::{DryingSnapshot, DryingTracker, TrackerError};
pub use scan::{ScanSummary, extract_time_code, scan_lines};
pub use timecode::{TimeCode, TimeCodeError};
