//! Scanner configuration.
//!
//! [`ScannerConfig`] holds the defaults a [`PathScanner`](crate::PathScanner)
//! applies to every scan; [`ScanOverrides`] replaces any of them for a single
//! call.

use serde::{Deserialize, Serialize};

/// Instance-wide scan options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Draw a spinner while listing (cosmetic only).
    pub show_progress: bool,
    /// Canonicalize every entry before classifying and returning it.
    pub resolve_paths: bool,
    /// Keep entries whose name starts with `.`.
    pub include_hidden: bool,
    /// Reuse results of earlier single-pass scans.
    pub enable_cache: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            show_progress: false,
            resolve_paths: false,
            include_hidden: true,
            enable_cache: true,
        }
    }
}

impl ScannerConfig {
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_resolve_paths(mut self, resolve_paths: bool) -> Self {
        self.resolve_paths = resolve_paths;
        self
    }

    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn with_cache(mut self, enable_cache: bool) -> Self {
        self.enable_cache = enable_cache;
        self
    }
}

/// Per-call replacements for [`ScannerConfig`] values.
///
/// `None` means "use the scanner's default".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOverrides {
    pub show_progress: Option<bool>,
    pub resolve_paths: Option<bool>,
    pub include_hidden: Option<bool>,
    pub use_cache: bool,
}

impl Default for ScanOverrides {
    fn default() -> Self {
        Self {
            show_progress: None,
            resolve_paths: None,
            include_hidden: None,
            use_cache: true,
        }
    }
}

impl ScanOverrides {
    pub fn show_progress(mut self, value: bool) -> Self {
        self.show_progress = Some(value);
        self
    }

    pub fn resolve_paths(mut self, value: bool) -> Self {
        self.resolve_paths = Some(value);
        self
    }

    pub fn include_hidden(mut self, value: bool) -> Self {
        self.include_hidden = Some(value);
        self
    }

    pub fn use_cache(mut self, value: bool) -> Self {
        self.use_cache = value;
        self
    }
}

/// Options after overrides have been applied to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub show_progress: bool,
    pub resolve_paths: bool,
    pub include_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            show_progress: false,
            resolve_paths: false,
            include_hidden: true,
        }
    }
}

impl ScanOptions {
    pub fn effective(config: &ScannerConfig, overrides: &ScanOverrides) -> Self {
        Self {
            show_progress: overrides.show_progress.unwrap_or(config.show_progress),
            resolve_paths: overrides.resolve_paths.unwrap_or(config.resolve_paths),
            include_hidden: overrides.include_hidden.unwrap_or(config.include_hidden),
        }
    }
}
