//! Corpus scanner
//!
//! Enumerates match-record files in a directory, decodes each one, runs the
//! extractor, and folds the results into a batch report. A failure on one
//! file never aborts the batch; only an unlistable directory does.

use crate::data::record::MatchData;
use crate::features::FeatureRecord;
use crate::Result;
use std::path::{Path, PathBuf};

/// One skipped file and the reason it was skipped
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of scanning one directory
#[derive(Debug, Default)]
pub struct ScanReport {
    /// One record per successfully processed file, in processing order
    pub rows: Vec<FeatureRecord>,
    /// Files that failed to decode or failed the extractor's checks
    pub failures: Vec<FileFailure>,
}

impl ScanReport {
    pub fn processed(&self) -> usize {
        self.rows.len()
    }
}

/// Scan a directory of `.json` match records.
///
/// Files with another extension are ignored. Entries are sorted by file
/// name so batch output is deterministic regardless of platform `read_dir`
/// order. Decode or extraction failures are logged with the file name and
/// collected in the report; the scan continues with the remaining files.
///
/// # Errors
///
/// Only a directory that cannot be listed is fatal.
pub fn scan_directory<P: AsRef<Path>>(dir: P) -> Result<ScanReport> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
        {
            paths.push(path);
        }
    }
    paths.sort();

    let mut report = ScanReport::default();
    for path in paths {
        match extract_file(&path) {
            Ok(record) => {
                log::info!("Processed {}", path.display());
                report.rows.push(record);
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                report.failures.push(FileFailure {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Decode one match file and extract its features
pub fn extract_file(path: &Path) -> Result<FeatureRecord> {
    let content = std::fs::read_to_string(path)?;
    let data: MatchData = serde_json::from_str(&content)?;
    FeatureRecord::from_match(&data)
}
