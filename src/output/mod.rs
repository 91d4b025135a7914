//! Output formatters for the `dirscan` application.
//!
//! Each formatter takes the files and folders of a finished scan and writes
//! them somewhere. Formatters are stateless and contain no scanning logic.
//!
//! # Available Formatters
//!
//! - **Terminal**: Human-readable summary with truncated listings
//! - **CSV**: One row per entry, for spreadsheets and scripts
//! - **JSON**: The whole result as one document

pub mod csv;
pub mod json;
pub mod terminal;

/// CSV output renderer function.
///
/// See [`csv::render`] for full documentation.
pub use self::csv::render as render_csv;

/// JSON output renderer function.
///
/// See [`json::render`] for full documentation.
pub use self::json::render as render_json;

/// Terminal output renderer function.
///
/// See [`terminal::render`] for full documentation.
pub use self::terminal::{print_scan_results, render as render_terminal};
