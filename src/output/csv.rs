//! CSV output formatter for scan results.
//!
//! This module exports the entries of a scan to CSV format for further
//! processing or analysis. Folders come after files, each in path order.

use crate::data::{Entry, ScanResult};
use anyhow::{Context, Result};
use csv::Writer;
use humansize::{format_size, DECIMAL};
use std::fs::File;
use std::io;
use std::path::Path;

/// A single record of CSV output.
///
/// # Fields
/// * `entry_type` - "DIR" or "FILE"
/// * `name` - Final path component
/// * `path` - Path as returned by the scan
/// * `size_bytes` - Size in bytes, empty for folders and unreadable files
/// * `size_human` - Human-readable size (e.g., "1.2 kB")
#[derive(Debug, serde::Serialize)]
pub struct CsvEntry {
    pub entry_type: &'static str,
    pub name: String,
    pub path: String,
    pub size_bytes: Option<u64>,
    pub size_human: Option<String>,
}

impl From<&Entry> for CsvEntry {
    fn from(entry: &Entry) -> Self {
        let size = if entry.is_file() {
            entry.size().ok()
        } else {
            None
        };
        Self {
            entry_type: entry.entry_type.as_str(),
            name: entry.name().into_owned(),
            path: entry.path.display().to_string(),
            size_bytes: size,
            size_human: size.map(|s| format_size(s, DECIMAL)),
        }
    }
}

/// Writes every entry of `result` as CSV to `writer`.
pub fn write<W: io::Write>(writer: W, result: &ScanResult) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    for entry in result.files.iter().chain(&result.folders) {
        csv_writer.serialize(CsvEntry::from(entry))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes `result` as CSV to the file at `output`, creating or truncating it.
pub fn render(result: &ScanResult, output: &Path) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create CSV file: {}", output.display()))?;
    write(file, result)?;
    eprintln!("CSV output written to: {}", output.display());
    Ok(())
}
