//! JSON output formatter for scan results.

use crate::data::{Entry, ScanResult};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Document written by [`render`].
#[derive(Debug, serde::Serialize)]
pub struct JsonReport<'a> {
    pub directory: &'a Path,
    pub files: &'a [Entry],
    pub folders: &'a [Entry],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_size: Option<u64>,
}

/// Writes `result` as pretty-printed JSON to `writer`.
///
/// `total_size` is included only when given.
pub fn render<W: Write>(
    mut writer: W,
    directory: &Path,
    result: &ScanResult,
    total_size: Option<u64>,
) -> Result<()> {
    let report = JsonReport {
        directory,
        files: &result.files,
        folders: &result.folders,
        total_size,
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    Ok(())
}
