//! Stateful scanner built on the scan primitives.
//!
//! [`PathScanner`] adds four things around [`scan_directory`] and
//! [`scan_directory_recursive`]:
//! - instance defaults ([`ScannerConfig`]) with per-call overrides
//! - an in-memory result cache for single-pass scans
//! - cumulative [`ScanStatistics`] and the history of scanned directories
//! - an ordered chain of file filters
//!
//! Filter registration methods return `&mut Self` so calls can be chained:
//!
//! ```rust,no_run
//! use dirscan::PathScanner;
//!
//! let mut scanner = PathScanner::default();
//! scanner.add_extension_filter(&["rs", "toml"]).add_size_filter(Some(1), None);
//! let result = scanner.scan(".")?;
//! println!("{} matching files", result.files.len());
//! # Ok::<(), dirscan::ScanError>(())
//! ```

use crate::cache::{CacheKey, ScanCache};
use crate::config::{ScanOptions, ScanOverrides, ScannerConfig};
use crate::data::{Entry, ScanResult};
use crate::error::Result;
use crate::filter::{self, FilterFn};
use crate::progress::{NoProgress, ProgressReporter};
use crate::scan::{scan_directory, scan_directory_recursive, scan_directory_with};
use crate::stats::ScanStatistics;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Scanner holding defaults, cache, statistics, history and filters.
///
/// A `PathScanner` is meant to be driven from one thread; every operation
/// that changes its state takes `&mut self`.
pub struct PathScanner {
    config: ScannerConfig,
    cache: ScanCache,
    stats: ScanStatistics,
    history: Vec<PathBuf>,
    filters: Vec<FilterFn>,
    progress: Option<Box<dyn ProgressReporter>>,
}

impl PathScanner {
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            cache: ScanCache::new(),
            stats: ScanStatistics::new(),
            history: Vec::new(),
            filters: Vec::new(),
            progress: None,
        }
    }

    /// Uses `reporter` instead of the default spinner whenever progress is on.
    pub fn with_progress_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.progress = Some(reporter);
        self
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Single-pass scan of `directory` with the instance defaults.
    pub fn scan(&mut self, directory: impl AsRef<Path>) -> Result<ScanResult> {
        self.scan_with(directory, ScanOverrides::default())
    }

    /// Single-pass scan of `directory` with per-call overrides.
    ///
    /// When caching is enabled and `overrides.use_cache` is set, a result
    /// stored under the same directory and options is returned as is and only
    /// the cache-hit counter moves. Otherwise the directory is listed, the
    /// filter chain runs over its files, statistics and history are updated,
    /// and the filtered result is cached.
    ///
    /// # Errors
    /// Returns the root-level errors of [`scan_directory`].
    pub fn scan_with(
        &mut self,
        directory: impl AsRef<Path>,
        overrides: ScanOverrides,
    ) -> Result<ScanResult> {
        let directory = directory.as_ref();
        let options = ScanOptions::effective(&self.config, &overrides);

        let key = if self.config.enable_cache && overrides.use_cache {
            let key =
                CacheKey::for_directory(directory, options.resolve_paths, options.include_hidden)?;
            if let Some(cached) = self.cache.get(&key) {
                self.stats.record_cache_hit();
                debug!("Cache hit for '{}'", directory.display());
                return Ok(cached);
            }
            Some(key)
        } else {
            None
        };

        let listing = match (&self.progress, options.show_progress) {
            (_, false) => scan_directory_with(directory, &options, &NoProgress)?,
            (Some(reporter), true) => scan_directory_with(directory, &options, reporter.as_ref())?,
            (None, true) => scan_directory(directory, &options)?,
        };
        let result = self.record(directory, listing);

        if let Some(key) = key {
            self.cache.insert(key, result.clone());
        }
        Ok(result)
    }

    /// Recursive scan of `directory`, see [`scan_directory_recursive`].
    ///
    /// Filters, statistics and history behave as in [`scan_with`](Self::scan_with).
    /// Recursive results are never cached.
    pub fn scan_recursive(
        &mut self,
        directory: impl AsRef<Path>,
        max_depth: Option<usize>,
    ) -> Result<ScanResult> {
        let directory = directory.as_ref();
        let listing = scan_directory_recursive(directory, max_depth)?;
        Ok(self.record(directory, listing))
    }

    /// Runs the filter chain and books the scan.
    fn record(&mut self, directory: &Path, listing: ScanResult) -> ScanResult {
        let (files, folders) = listing.into_parts();
        let files = self.apply_filters(files);

        self.stats.record_scan(files.len(), folders.len());
        self.history.push(directory.to_path_buf());

        ScanResult { files, folders }
    }

    fn apply_filters(&self, files: Vec<Entry>) -> Vec<Entry> {
        self.filters.iter().fold(files, |files, filter| filter(files))
    }

    /// Keeps only files with one of `extensions` (case-insensitive, dot optional).
    pub fn add_extension_filter<S: AsRef<str>>(&mut self, extensions: &[S]) -> &mut Self {
        self.filters.push(filter::extension_filter(extensions));
        self
    }

    /// Keeps only files whose size is within the inclusive bounds.
    pub fn add_size_filter(&mut self, min_size: Option<u64>, max_size: Option<u64>) -> &mut Self {
        self.filters.push(filter::size_filter(min_size, max_size));
        self
    }

    /// Drops files whose path matches one of the exclude patterns.
    ///
    /// # Errors
    /// Returns [`ScanError::InvalidPattern`](crate::ScanError::InvalidPattern)
    /// and leaves the chain unchanged if a pattern does not compile.
    pub fn add_exclude_filter<S: AsRef<str>>(&mut self, patterns: &[S]) -> Result<&mut Self> {
        self.filters.push(filter::exclude_filter(patterns)?);
        Ok(self)
    }

    /// Appends an arbitrary transform over the file list.
    pub fn add_custom_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(Vec<Entry>) -> Vec<Entry> + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn clear_filters(&mut self) -> &mut Self {
        self.filters.clear();
        self
    }

    pub fn clear_cache(&mut self) -> &mut Self {
        if !self.cache.is_empty() {
            debug!("Dropping {} cached results", self.cache.len());
        }
        self.cache.clear();
        self
    }

    /// Zeroes the statistics and forgets the scan history.
    pub fn reset_stats(&mut self) -> &mut Self {
        self.stats = ScanStatistics::new();
        self.history.clear();
        self
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Number of results currently held in the cache.
    pub fn cached_results(&self) -> usize {
        self.cache.len()
    }

    /// Copy of the current statistics.
    pub fn stats(&self) -> ScanStatistics {
        self.stats
    }

    /// Copy of the directory arguments of every fresh scan, oldest first.
    pub fn scan_history(&self) -> Vec<PathBuf> {
        self.history.clone()
    }
}

impl Default for PathScanner {
    fn default() -> Self {
        Self::new(ScannerConfig::default())
    }
}

impl fmt::Debug for PathScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathScanner")
            .field("config", &self.config)
            .field("cached_results", &self.cache.len())
            .field("stats", &self.stats)
            .field("history", &self.history)
            .field("filters", &self.filters.len())
            .field("custom_progress", &self.progress.is_some())
            .finish()
    }
}
