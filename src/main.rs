//! Main entry point for the `dirscan` CLI application.
//!
//! `dirscan` lists the files and folders of a directory and prints a short
//! summary, optionally descending into sub-folders and filtering the files.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Sets up `tracing` logging on stderr
//! - Builds a [`PathScanner`] with the filters the flags ask for
//! - Prints the terminal summary, or writes CSV / JSON output
//!
//! # Exit status
//! `0` on success. `1` after printing `Error: <message>` to stdout when the
//! directory is missing, not a directory, unreadable, or output fails.

use anyhow::Result;
use clap::Parser;
use dirscan::output::{self, print_scan_results};
use dirscan::{get_directory_size, Args, PathScanner, ScanError, ScanResult, ScannerConfig};
use humansize::{format_size, DECIMAL};
use std::io;
use std::process::ExitCode;
use tracing::debug;

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Registers the filters requested on the command line, in a fixed order:
/// extensions, size bounds, then excludes.
fn build_filters(scanner: &mut PathScanner, args: &Args) -> Result<()> {
    let extensions = args.effective_extensions();
    if !extensions.is_empty() {
        scanner.add_extension_filter(extensions.as_slice());
    }
    if args.min_size.is_some() || args.max_size.is_some() {
        scanner.add_size_filter(args.min_size, args.max_size);
    }
    if !args.exclude.is_empty() {
        scanner.add_exclude_filter(args.exclude.as_slice())?;
    }
    Ok(())
}

fn output_results(args: &Args, result: &ScanResult, total_size: Option<u64>) -> Result<()> {
    if let Some(csv_path) = &args.output {
        output::render_csv(result, csv_path)?;
    } else if args.json {
        output::render_json(io::stdout().lock(), &args.directory, result, total_size)?;
    } else {
        print_scan_results(&result.files, &result.folders, &args.directory)?;
        if let Some(size) = total_size {
            println!("Total size: {}", format_size(size, DECIMAL));
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let mut scanner = PathScanner::new(ScannerConfig::from(args));
    build_filters(&mut scanner, args)?;

    // Parse args → build_filters → scan → output_results
    let result = if args.recursive {
        scanner.scan_recursive(&args.directory, args.max_depth)?
    } else {
        scanner.scan(&args.directory)?
    };

    let (files, mut folders) = result.into_parts();
    if args.python {
        // Folders are not shown when filtering for Python files
        folders.clear();
    }
    let result = ScanResult { files, folders };

    let total_size = if args.size {
        Some(get_directory_size(&args.directory)?)
    } else {
        None
    };

    output_results(args, &result, total_size)?;
    let stats = scanner.stats();
    debug!(
        "Scan statistics: {:?} (cache hit rate {:.0}%)",
        stats,
        stats.cache_hit_rate() * 100.0
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose, args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ScanError>() {
                Some(scan_err) if scan_err.is_validation() => println!("Error: {scan_err}"),
                _ => println!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
