//! Data structures for representing scanned directory entries.
//!
//! This module defines the core data structures used throughout `dirscan`
//! for representing files and folders discovered while listing a directory.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Represents a file or folder discovered during scanning.
///
/// Ordering and equality are by path first, which is the order both
/// sequences of a [`ScanResult`] are kept in.
///
/// # Fields
/// * `path` - The path as listed (or canonicalized when path resolution is on)
/// * `entry_type` - Whether the entry was classified as a file or a folder
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Entry {
    pub path: PathBuf,
    pub entry_type: EntryType,
}

/// Represents the type of file system entry.
///
/// # Variants
/// * `File` - A regular file
/// * `Dir` - A directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum EntryType {
    File,
    Dir,
}

impl EntryType {
    /// Returns a string representation of the entry type.
    ///
    /// # Returns
    /// * `"FILE"` for `EntryType::File`
    /// * `"DIR"` for `EntryType::Dir`
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::File => "FILE",
            EntryType::Dir => "DIR",
        }
    }
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, entry_type: EntryType) -> Self {
        Self {
            path: path.into(),
            entry_type,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryType::File)
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryType::Dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, or the whole path when it has none (e.g. `/`).
    pub fn name(&self) -> Cow<'_, str> {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => self.path.to_string_lossy(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }

    /// Size in bytes, read from the filesystem on every call.
    pub fn size(&self) -> io::Result<u64> {
        fs::metadata(&self.path).map(|m| m.len())
    }

    /// Lowercased extension including the leading dot, e.g. `".txt"`.
    ///
    /// A name ending in a bare dot (`"foo."`) has no extension.
    pub fn suffix(&self) -> Option<String> {
        self.path
            .extension()
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
    }
}

/// Files and folders found by a scan, each sorted ascending by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScanResult {
    pub files: Vec<Entry>,
    pub folders: Vec<Entry>,
}

impl ScanResult {
    /// Builds a result from unsorted sequences, sorting both.
    pub fn new(mut files: Vec<Entry>, mut folders: Vec<Entry>) -> Self {
        files.sort();
        folders.sort();
        Self { files, folders }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.folders.len()
    }

    pub fn into_parts(self) -> (Vec<Entry>, Vec<Entry>) {
        (self.files, self.folders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::file("/test/file.txt");

        assert!(entry.is_file());
        assert!(!entry.is_dir());
        assert_eq!(entry.name(), "file.txt");
        assert_eq!(entry.path(), Path::new("/test/file.txt"));
        assert_eq!(entry.entry_type.as_str(), "FILE");
    }

    #[test]
    fn test_entry_type_as_str() {
        assert_eq!(EntryType::File.as_str(), "FILE");
        assert_eq!(EntryType::Dir.as_str(), "DIR");
    }

    #[test]
    fn test_suffix_is_lowercased() {
        assert_eq!(Entry::file("A.TXT").suffix().as_deref(), Some(".txt"));
        assert_eq!(Entry::file("archive.tar.GZ").suffix().as_deref(), Some(".gz"));
        assert_eq!(Entry::file("Makefile").suffix(), None);
        assert_eq!(Entry::file(".bashrc").suffix(), None);
        assert_eq!(Entry::file("foo.").suffix(), None);
    }

    #[test]
    fn test_size_reads_the_filesystem() {
        let temp = tempfile::TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("data.bin"), [0u8; 64]).unwrap();

        let entry = Entry::file(temp.path().join("sub").join("..").join("data.bin"));
        assert_eq!(entry.size().unwrap(), 64);
        assert!(Entry::file(temp.path().join("gone")).size().is_err());
    }

    #[test]
    fn test_name_of_root_falls_back_to_path() {
        assert_eq!(Entry::dir("/").name(), "/");
    }

    #[test]
    fn test_scan_result_sorts_both_sides() {
        let result = ScanResult::new(
            vec![Entry::file("/d/b.txt"), Entry::file("/d/a.txt")],
            vec![Entry::dir("/d/z"), Entry::dir("/d/m")],
        );

        assert_eq!(result.files[0].path, PathBuf::from("/d/a.txt"));
        assert_eq!(result.folders[0].path, PathBuf::from("/d/m"));
        assert_eq!(result.len(), 4);
        assert!(!result.is_empty());
        assert!(ScanResult::default().is_empty());
    }
}
