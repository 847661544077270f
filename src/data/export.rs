//! Table writer
//!
//! Renders feature records as delimited text: one header line plus one line
//! per match, every value double-quoted. Values containing quotes or commas
//! are escaped by the `csv` writer rather than corrupting the row.

use crate::features::{FeatureRecord, FeatureShape};
use crate::Result;
use std::path::Path;

/// Write the header and all rows to a CSV file
pub fn write_table<P: AsRef<Path>>(
    path: P,
    shape: FeatureShape,
    rows: &[FeatureRecord],
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_path(path.as_ref())?;
    write_records(&mut writer, shape, rows)?;
    writer.flush().map_err(crate::CricketError::Io)?;
    Ok(())
}

/// Render the header and rows to an in-memory string (single-file mode)
pub fn render_table(shape: FeatureShape, rows: &[FeatureRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());
    write_records(&mut writer, shape, rows)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::CricketError::Config(format!("CSV buffer error: {}", e)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    shape: FeatureShape,
    rows: &[FeatureRecord],
) -> Result<()> {
    writer.write_record(shape.header())?;
    for row in rows {
        writer.write_record(row.render(shape))?;
    }
    Ok(())
}
