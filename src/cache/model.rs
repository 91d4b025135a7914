//! Cache key definition
//!
//! A cached listing is only valid for the exact combination of directory and
//! options that produced it, so all three are part of the key.

use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};

/// Identifies a cached single-pass scan.
///
/// The directory is stored in canonical form so that `./src`, `src/` and
/// the absolute path all share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Canonical path of the scanned directory
    pub directory: PathBuf,
    /// Whether entries were canonicalized
    pub resolve_paths: bool,
    /// Whether dot-entries were kept
    pub include_hidden: bool,
}

impl CacheKey {
    /// Builds the key for `directory`, canonicalizing it.
    ///
    /// # Errors
    /// Returns [`ScanError::NotFound`] or [`ScanError::PermissionDenied`] when
    /// the directory cannot be canonicalized.
    pub fn for_directory(
        directory: &Path,
        resolve_paths: bool,
        include_hidden: bool,
    ) -> Result<Self> {
        let canonical =
            dunce::canonicalize(directory).map_err(|e| ScanError::root(directory, e))?;
        Ok(Self {
            directory: canonical,
            resolve_paths,
            include_hidden,
        })
    }
}
