//! Error types for directory scanning.
//!
//! Only root-level failures are represented here. Problems with individual
//! children of a scanned directory are logged and skipped, never returned.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan operation.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory argument does not exist.
    #[error("Directory '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    /// The directory argument exists but is not a directory.
    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// The directory could not be stat'ed or opened for listing.
    #[error("Permission denied accessing '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure on the directory itself.
    #[error("I/O error accessing '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An exclude pattern failed to compile.
    #[error("Invalid glob pattern: '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl ScanError {
    /// Wraps an I/O error with the path it occurred on, mapping the kinds
    /// that have a dedicated variant.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Wraps an error raised while checking the directory argument itself.
    ///
    /// A path that cannot be reached because an ancestor is a regular file, or
    /// because resolving it loops through symlinks, does not exist as far as
    /// the caller is concerned and maps to [`ScanError::NotFound`].
    pub fn root(path: impl Into<PathBuf>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotADirectory || is_symlink_loop(&source) {
            return Self::NotFound { path: path.into() };
        }
        Self::io(path, source)
    }

    /// True for the three validation failures a CLI reports as user errors.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::NotADirectory { .. } | Self::PermissionDenied { .. }
        )
    }
}

#[cfg(unix)]
fn is_symlink_loop(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::ELOOP)
}

#[cfg(not(unix))]
fn is_symlink_loop(_err: &io::Error) -> bool {
    false
}

pub type Result<T> = std::result::Result<T, ScanError>;
