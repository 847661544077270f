//! Data plumbing around the extractor
//!
//! JSON decoding of match records, directory scanning, and CSV export.

pub mod export;
pub mod record;
pub mod scanner;

pub use record::MatchData;
pub use scanner::{ScanReport, scan_directory};
