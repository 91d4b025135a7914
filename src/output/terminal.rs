//! Terminal output formatter for scan results.
//!
//! This module prints a short human-readable summary of a scan: the number of
//! files and folders, their names (truncated for long listings) and a total.

use crate::data::Entry;
use std::io::{self, Write};
use std::path::Path;

/// Listings longer than this are truncated.
pub const MAX_LISTED: usize = 10;

/// Number of names shown before a truncated listing's "... and N more" line.
pub const TRUNCATED_PREVIEW: usize = 5;

/// Writes the summary of a scan to `out`.
///
/// # Arguments
/// * `out` - Destination of the summary
/// * `files` - Files found, already filtered and sorted
/// * `folders` - Folders found, already sorted
/// * `directory` - The directory as the user gave it, used in headings
pub fn render<W: Write>(
    out: &mut W,
    files: &[Entry],
    folders: &[Entry],
    directory: &Path,
) -> io::Result<()> {
    if files.is_empty() && folders.is_empty() {
        writeln!(out, "Directory '{}' is empty", directory.display())?;
        return Ok(());
    }

    writeln!(out, "\nScan results for '{}':", directory.display())?;
    writeln!(out, "{}", "-".repeat(40))?;

    if files.is_empty() {
        writeln!(out, "No files found")?;
    } else {
        writeln!(out, "Files found: {}", files.len())?;
        render_listing(out, files, "📄", "files")?;
    }

    if folders.is_empty() {
        writeln!(out, "No folders found")?;
    } else {
        writeln!(out, "\nFolders found: {}", folders.len())?;
        render_listing(out, folders, "📁", "folders")?;
    }

    writeln!(
        out,
        "\nTotal: {} files, {} folders",
        files.len(),
        folders.len()
    )
}

fn render_listing<W: Write>(
    out: &mut W,
    entries: &[Entry],
    icon: &str,
    noun: &str,
) -> io::Result<()> {
    if entries.len() <= MAX_LISTED {
        for entry in entries {
            writeln!(out, "  {} {}", icon, entry.name())?;
        }
    } else {
        for entry in &entries[..TRUNCATED_PREVIEW] {
            writeln!(out, "  {} {}", icon, entry.name())?;
        }
        writeln!(
            out,
            "  ... and {} more {}",
            entries.len() - TRUNCATED_PREVIEW,
            noun
        )?;
    }
    Ok(())
}

/// Prints the summary of a scan to stdout.
pub fn print_scan_results(files: &[Entry], folders: &[Entry], directory: &Path) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, files, folders, directory)
}
