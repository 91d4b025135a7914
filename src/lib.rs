//! Library crate for dirscan
//!
//! Lists the contents of a directory, split into files and folders, with
//! optional recursion, filtering, caching and summaries.
//!
//! # Features
//!
//! - **Single-pass scanning**: Immediate children of one directory, sorted by path
//! - **Recursive scanning**: Repeated single-pass scans with an optional depth bound
//! - **Filters**: Extension, size, glob-exclude and custom filters over scanned files
//! - **Stateful scanner**: [`PathScanner`] with a result cache, statistics and history
//! - **Output**: Terminal summary, CSV and JSON formatters
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`Entry`, `EntryType`, `ScanResult`)
//! - [`error`]: The `ScanError` type returned for root-level failures
//! - [`scan`]: Scan primitives and size helpers
//! - [`filter`]: Filter functions and the `FilterFn` type
//! - [`scanner`]: The stateful `PathScanner`
//! - [`cache`]: In-memory cache used by `PathScanner`
//! - [`stats`]: Cumulative scan statistics
//! - [`config`]: Scanner defaults and per-call overrides
//! - [`progress`]: Injectable progress display
//! - [`output`]: Output formatters (terminal, CSV, JSON)
//! - [`cli`]: Command-line interface definitions

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod output;
pub mod progress;
pub mod scan;
pub mod scanner;
pub mod stats;

pub use cli::Args;
pub use config::{ScanOptions, ScanOverrides, ScannerConfig};
pub use data::{Entry, EntryType, ScanResult};
pub use error::{Result, ScanError};
pub use filter::{filter_by_extension, FilterFn};
pub use scan::{
    find_python_files, find_text_files, get_directory_size, scan_directory,
    scan_directory_recursive, scan_directory_simple, scan_directory_with, validate_directory,
};
pub use scanner::PathScanner;
pub use stats::ScanStatistics;
