//! Directory scanning module for `dirscan`.
//!
//! This module handles:
//! - Single-pass listing of one directory into files and folders
//! - Recursive listing built from repeated single-pass scans
//! - Root validation with typed errors
//! - Total size of a directory tree
//!
//! Errors on the directory being scanned are returned to the caller. Errors on
//! its children (unreadable entries, broken symlinks, entries that vanish mid
//! scan) are logged with `tracing` and the entry is skipped.
//!
//! Every function returns its sequences sorted ascending by path.

use crate::config::ScanOptions;
use crate::data::{Entry, ScanResult};
use crate::error::{Result, ScanError};
use crate::filter::filter_by_extension;
use crate::progress::{self, EntryIter, ProgressReporter};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extensions matched by [`find_text_files`].
pub const TEXT_EXTENSIONS: [&str; 3] = [".txt", ".md", ".rst"];

/// Checks that `directory` exists and is a directory.
///
/// # Errors
/// * [`ScanError::NotFound`] if nothing exists at the path, including paths
///   through a regular file or a symlink loop
/// * [`ScanError::NotADirectory`] if the path is not a directory
/// * [`ScanError::PermissionDenied`] if the path cannot be stat'ed
pub fn validate_directory(directory: impl AsRef<Path>) -> Result<PathBuf> {
    let path = directory.as_ref();
    let metadata = fs::metadata(path).map_err(|e| ScanError::root(path, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

/// Lists the immediate children of `directory` in a single pass.
///
/// Progress is drawn with the reporter chosen by [`progress::reporter_for`].
///
/// # Arguments
/// * `directory` - The directory to list
/// * `options` - Progress, path resolution and hidden-entry settings
///
/// # Errors
/// Returns an error if the directory fails validation or cannot be opened
/// for listing. Failures on individual children are never returned.
pub fn scan_directory(directory: impl AsRef<Path>, options: &ScanOptions) -> Result<ScanResult> {
    let reporter = progress::reporter_for(options.show_progress);
    scan_directory_with(directory, options, reporter.as_ref())
}

/// Same as [`scan_directory`] with an explicit progress reporter.
///
/// `options.show_progress` is ignored; the reporter decides what is drawn.
pub fn scan_directory_with(
    directory: impl AsRef<Path>,
    options: &ScanOptions,
    progress: &dyn ProgressReporter,
) -> Result<ScanResult> {
    let path = validate_directory(directory)?;
    let listing = fs::read_dir(&path).map_err(|e| ScanError::io(&path, e))?;
    let label = format!("Scanning {}", display_name(&path));

    let mut files = Vec::new();
    let mut folders = Vec::new();

    let items: EntryIter<'_> = Box::new(listing);
    for item in progress.wrap(items, &label) {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                warn!("Skipping unreadable entry in '{}': {}", path.display(), err);
                continue;
            }
        };

        if !options.include_hidden && is_hidden(&item.file_name()) {
            continue;
        }

        let child = item.path();
        match classify(&child, options.resolve_paths) {
            Ok(entry) if entry.is_file() => files.push(entry),
            Ok(entry) => folders.push(entry),
            Err(err) => warn!("Skipping '{}': {}", child.display(), err),
        }
    }

    debug!(
        "Scanned '{}': {} files, {} folders",
        path.display(),
        files.len(),
        folders.len()
    );
    Ok(ScanResult::new(files, folders))
}

/// Single-pass scan with no progress, no path resolution and hidden entries included.
pub fn scan_directory_simple(directory: impl AsRef<Path>) -> Result<ScanResult> {
    scan_directory_with(directory, &ScanOptions::default(), &progress::NoProgress)
}

/// Lists `directory` and every folder below it.
///
/// The root is listed at depth 0 and the children of a folder listed at depth
/// `d` are listed at depth `d + 1`. With `max_depth = Some(n)` no listing
/// deeper than `n` happens, so `Some(0)` returns only the root's immediate
/// children. `None` descends without limit.
///
/// Every listing uses [`scan_directory_simple`]. Symbolic links to folders are
/// followed and there is no cycle detection; a link back to an ancestor is
/// walked until `max_depth` or the OS path limits stop it.
///
/// # Errors
/// Failures on the root are returned. A sub-folder that cannot be listed is
/// logged and skipped along with everything below it.
pub fn scan_directory_recursive(
    directory: impl AsRef<Path>,
    max_depth: Option<usize>,
) -> Result<ScanResult> {
    let root = validate_directory(directory)?;

    let mut files = Vec::new();
    let mut folders = Vec::new();
    let mut pending = vec![(root, 0usize)];

    while let Some((dir, depth)) = pending.pop() {
        let listing = match scan_directory_simple(&dir) {
            Ok(listing) => listing,
            Err(err) if depth > 0 => {
                warn!("Skipping '{}': {}", dir.display(), err);
                continue;
            }
            Err(err) => return Err(err),
        };

        if max_depth.is_none_or(|max| depth < max) {
            pending.extend(listing.folders.iter().map(|f| (f.path.clone(), depth + 1)));
        }

        let (dir_files, dir_folders) = listing.into_parts();
        files.extend(dir_files);
        folders.extend(dir_folders);
    }

    Ok(ScanResult::new(files, folders))
}

/// Total size in bytes of every file below `directory`.
///
/// Files whose size cannot be read are left out of the total.
///
/// # Errors
/// Returns an error if `directory` fails validation or cannot be listed.
pub fn get_directory_size(directory: impl AsRef<Path>) -> Result<u64> {
    let root = validate_directory(directory)?;
    let listing = scan_directory_recursive(&root, None)?;
    Ok(listing.files.iter().filter_map(|f| f.size().ok()).sum())
}

/// `.py` files in `directory`, optionally descending into every folder.
pub fn find_python_files(directory: impl AsRef<Path>, recursive: bool) -> Result<Vec<Entry>> {
    let files = list_files(directory.as_ref(), recursive)?;
    Ok(filter_by_extension(files, &[".py"]))
}

/// Text files (see [`TEXT_EXTENSIONS`]) in `directory`, optionally descending into every folder.
pub fn find_text_files(directory: impl AsRef<Path>, recursive: bool) -> Result<Vec<Entry>> {
    let files = list_files(directory.as_ref(), recursive)?;
    Ok(filter_by_extension(files, &TEXT_EXTENSIONS))
}

fn list_files(directory: &Path, recursive: bool) -> Result<Vec<Entry>> {
    let listing = if recursive {
        scan_directory_recursive(directory, None)?
    } else {
        scan_directory_simple(directory)?
    };
    Ok(listing.files)
}

/// Resolves (when asked) and classifies one child path.
///
/// Anything that is neither a regular file nor a directory after following
/// symlinks is reported as an error so the caller skips it.
fn classify(path: &Path, resolve: bool) -> io::Result<Entry> {
    let path = if resolve {
        dunce::canonicalize(path)?
    } else {
        path.to_path_buf()
    };

    let metadata = fs::metadata(&path)?;
    if metadata.is_file() {
        Ok(Entry::file(path))
    } else if metadata.is_dir() {
        Ok(Entry::dir(path))
    } else {
        Err(io::Error::other("not a regular file or directory"))
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
