//! CLI interface definitions for the `dirscan` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes
//! [`Args`], the struct parsed from CLI inputs, together with the mapping from
//! its flags onto a [`ScannerConfig`].
//!
//! # Example
//!
//! ```bash
//! dirscan ./project --recursive --max-depth 2 --ext rs toml --exclude target
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use crate::config::ScannerConfig;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `dirscan`.
///
/// # Examples
///
/// ```rust
/// use dirscan::Args;
/// use clap::Parser;
///
/// let args = Args::parse_from(["dirscan", "src", "--recursive", "--python"]);
/// assert!(args.recursive);
/// assert!(args.python);
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "dirscan", version, about = "Scan directory for files and folders")]
pub struct Args {
    /// Directory to scan
    pub directory: PathBuf,

    /// Show progress bar
    #[arg(short, long, default_value_t = false)]
    pub progress: bool,

    /// Recursive scan
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Maximum folder depth for a recursive scan (default: unlimited)
    #[arg(long, value_name = "N", requires = "recursive")]
    pub max_depth: Option<usize>,

    /// Show only Python files
    #[arg(long, default_value_t = false)]
    pub python: bool,

    /// Keep only files with these extensions (e.g. 'rs', '.toml')
    #[arg(long = "ext", value_name = "EXT", num_args = 1.., action = clap::ArgAction::Append)]
    pub extensions: Vec<String>,

    /// Keep only files of at least this many bytes
    #[arg(long, value_name = "BYTES")]
    pub min_size: Option<u64>,

    /// Keep only files of at most this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<u64>,

    /// Exclude files with matching paths (e.g., 'node_modules', '*.log')
    #[arg(long, value_name = "PATTERN", num_args = 1.., action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Skip entries whose name starts with '.'
    #[arg(long, default_value_t = false)]
    pub no_hidden: bool,

    /// Report canonical absolute paths
    #[arg(long, default_value_t = false)]
    pub resolve: bool,

    /// Also report the total size of the directory tree
    #[arg(long, default_value_t = false)]
    pub size: bool,

    /// Write entries to a CSV file instead of printing the summary
    #[arg(long, value_name = "FILE", conflicts_with = "json")]
    pub output: Option<PathBuf>,

    /// Print the result as JSON instead of the summary
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress warnings about skipped entries
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Extensions to filter on, with `--python` adding `.py`.
    pub fn effective_extensions(&self) -> Vec<String> {
        let mut extensions = self.extensions.clone();
        if self.python {
            extensions.push(".py".to_string());
        }
        extensions
    }
}

impl From<&Args> for ScannerConfig {
    fn from(args: &Args) -> Self {
        ScannerConfig::default()
            .with_progress(args.progress)
            .with_resolve_paths(args.resolve)
            .with_hidden(!args.no_hidden)
    }
}
