use dirscan::scan::TEXT_EXTENSIONS;
use dirscan::{
    find_python_files, find_text_files, get_directory_size, scan_directory,
    scan_directory_recursive, scan_directory_simple, validate_directory, Entry, ScanError,
    ScanOptions,
};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn names(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(|e| e.name().into_owned()).collect()
}

fn assert_sorted(entries: &[Entry]) {
    let paths: Vec<&PathBuf> = entries.iter().map(|e| &e.path).collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted, "entries are not sorted by path");
}

/// Creates:
/// temp/
/// ├── .hidden_dir/
/// ├── .hidden.txt
/// ├── a.txt
/// ├── B.py
/// ├── docs/
/// │   └── guide.md
/// └── src/
///     ├── main.py
///     └── nested/
///         └── deep.rst
fn build_tree() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();

    fs::create_dir(root.join(".hidden_dir")).unwrap();
    fs::create_dir(root.join("docs")).unwrap();
    fs::create_dir_all(root.join("src").join("nested")).unwrap();

    fs::write(root.join(".hidden.txt"), "secret").unwrap();
    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::write(root.join("B.py"), "print('b')").unwrap();
    fs::write(root.join("docs").join("guide.md"), "# guide").unwrap();
    fs::write(root.join("src").join("main.py"), "print('main')").unwrap();
    fs::write(root.join("src").join("nested").join("deep.rst"), "deep").unwrap();

    temp
}

#[test]
fn test_single_pass_splits_files_and_folders() {
    let temp = build_tree();
    let result = scan_directory_simple(temp.path()).expect("Failed to scan directory");

    assert_eq!(names(&result.files), vec![".hidden.txt", "B.py", "a.txt"]);
    assert_eq!(names(&result.folders), vec![".hidden_dir", "docs", "src"]);
    assert!(result.files.iter().all(Entry::is_file));
    assert!(result.folders.iter().all(Entry::is_dir));
    assert_sorted(&result.files);
    assert_sorted(&result.folders);
}

#[test]
fn test_union_equals_listable_entries() {
    let temp = build_tree();
    let result = scan_directory_simple(temp.path()).unwrap();

    let listed: HashSet<PathBuf> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    let files: HashSet<PathBuf> = result.files.iter().map(|e| e.path.clone()).collect();
    let folders: HashSet<PathBuf> = result.folders.iter().map(|e| e.path.clone()).collect();

    assert!(files.is_disjoint(&folders));
    assert_eq!(&files | &folders, listed);
}

#[test]
fn test_hidden_entries_excluded_on_request() {
    let temp = build_tree();
    let options = ScanOptions {
        include_hidden: false,
        ..ScanOptions::default()
    };
    let result = scan_directory(temp.path(), &options).unwrap();

    assert_eq!(names(&result.files), vec!["B.py", "a.txt"]);
    assert_eq!(names(&result.folders), vec!["docs", "src"]);
}

#[test]
fn test_resolve_paths_returns_canonical_paths() {
    let temp = build_tree();
    let roundabout = temp.path().join("docs").join("..");
    let options = ScanOptions {
        resolve_paths: true,
        ..ScanOptions::default()
    };
    let result = scan_directory(&roundabout, &options).unwrap();

    let root = canonical_root(temp.path());
    assert!(result.files.iter().all(|e| e.path.starts_with(&root)));
    assert!(result.files.iter().all(|e| e.path.is_absolute()));
    assert!(result
        .folders
        .iter()
        .all(|e| !e.path.components().any(|c| c.as_os_str() == "..")));
    assert_sorted(&result.files);
}

fn canonical_root(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap()
}

#[test]
fn test_progress_does_not_change_result() {
    let temp = build_tree();
    let plain = scan_directory_simple(temp.path()).unwrap();
    let with_progress = scan_directory(
        temp.path(),
        &ScanOptions {
            show_progress: true,
            ..ScanOptions::default()
        },
    )
    .unwrap();
    assert_eq!(plain, with_progress);
}

#[test]
fn test_empty_directory() {
    let temp = TempDir::new().unwrap();
    let result = scan_directory_simple(temp.path()).unwrap();
    assert!(result.files.is_empty());
    assert!(result.folders.is_empty());
}

#[test]
fn test_nonexistent_path_is_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");

    let err = scan_directory_simple(&missing).unwrap_err();
    assert!(matches!(err, ScanError::NotFound { .. }));
    assert!(err.to_string().contains("does not exist"));

    assert!(matches!(
        scan_directory_recursive(&missing, None),
        Err(ScanError::NotFound { .. })
    ));
    assert!(matches!(
        get_directory_size(&missing),
        Err(ScanError::NotFound { .. })
    ));
}

#[test]
fn test_path_below_a_file_is_not_found() {
    let temp = build_tree();
    let below_file = temp.path().join("a.txt").join("sub");

    let err = scan_directory_simple(&below_file).unwrap_err();
    assert!(matches!(err, ScanError::NotFound { .. }));
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        format!("Directory '{}' does not exist", below_file.display())
    );
    assert!(matches!(
        scan_directory_recursive(&below_file, None),
        Err(ScanError::NotFound { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_is_not_found() {
    use std::os::unix::fs::symlink;

    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first");
    let second = temp.path().join("second");
    symlink(&second, &first).unwrap();
    symlink(&first, &second).unwrap();

    assert!(matches!(
        validate_directory(&first),
        Err(ScanError::NotFound { .. })
    ));
}

#[test]
fn test_regular_file_is_not_a_directory() {
    let temp = build_tree();
    let file = temp.path().join("a.txt");

    let err = scan_directory_simple(&file).unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory { .. }));
    assert!(matches!(
        validate_directory(&file),
        Err(ScanError::NotADirectory { .. })
    ));
    assert_eq!(validate_directory(temp.path()).unwrap(), temp.path());
}

#[test]
fn test_recursive_depth_zero_lists_root_only() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("top.txt"), "top").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("inner.txt"), "inner").unwrap();

    let result = scan_directory_recursive(root, Some(0)).unwrap();
    assert_eq!(result.files, vec![Entry::file(root.join("top.txt"))]);
    assert_eq!(result.folders, vec![Entry::dir(root.join("sub"))]);
}

#[test]
fn test_recursive_depth_one_descends_once() {
    let temp = build_tree();
    let result = scan_directory_recursive(temp.path(), Some(1)).unwrap();

    let files = names(&result.files);
    assert!(files.contains(&"main.py".to_string()));
    assert!(files.contains(&"guide.md".to_string()));
    assert!(!files.contains(&"deep.rst".to_string()));
    assert!(names(&result.folders).contains(&"nested".to_string()));
}

#[test]
fn test_recursive_unbounded_finds_all_levels() {
    let temp = build_tree();
    let result = scan_directory_recursive(temp.path(), None).unwrap();

    let files: HashSet<String> = names(&result.files).into_iter().collect();
    let expected: HashSet<String> = [
        ".hidden.txt",
        "a.txt",
        "B.py",
        "guide.md",
        "main.py",
        "deep.rst",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(files, expected);
    assert_eq!(result.folders.len(), 4);
    assert_sorted(&result.files);
    assert_sorted(&result.folders);
}

#[cfg(unix)]
#[test]
fn test_recursive_skips_unreadable_subfolder() {
    use std::os::unix::fs::PermissionsExt;

    let temp = build_tree();
    let locked = temp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("inside.txt"), "x").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root bypasses permission bits, so only check the scan completes
    let result = scan_directory_recursive(temp.path(), None);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let result = result.expect("recursive scan should not fail on a locked sub-folder");
    assert!(names(&result.folders).contains(&"locked".to_string()));
    assert!(names(&result.files).contains(&"deep.rst".to_string()));
}

#[test]
fn test_directory_size_sums_all_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("a").join("b")).unwrap();
    fs::write(root.join("one.bin"), vec![0u8; 100]).unwrap();
    fs::write(root.join("a").join("two.bin"), vec![0u8; 250]).unwrap();
    fs::write(root.join("a").join("b").join("three.bin"), vec![0u8; 7]).unwrap();

    assert_eq!(get_directory_size(root).unwrap(), 357);
}

#[test]
fn test_find_python_and_text_files() {
    let temp = build_tree();

    assert_eq!(names(&find_python_files(temp.path(), false).unwrap()), vec!["B.py"]);
    assert_eq!(
        names(&find_python_files(temp.path(), true).unwrap()),
        vec!["B.py", "main.py"]
    );

    let text = names(&find_text_files(temp.path(), true).unwrap());
    assert_eq!(text.len(), 4);
    assert!(TEXT_EXTENSIONS.contains(&".rst"));
    assert!(text.contains(&"deep.rst".to_string()));
    assert!(text.contains(&"guide.md".to_string()));
}
