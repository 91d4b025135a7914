//! File filters applied to scan results.
//!
//! A filter is any [`FilterFn`]: it takes the files of a scan and returns the
//! ones to keep. Filters only ever see the `files` side of a
//! [`ScanResult`](crate::ScanResult); folders pass through untouched.

use crate::data::Entry;
use crate::error::{Result, ScanError};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// A transform over the files of a scan result.
pub type FilterFn = Box<dyn Fn(Vec<Entry>) -> Vec<Entry>>;

/// Lowercases each extension and makes sure it starts with `.`.
pub fn normalize_extensions<S: AsRef<str>>(extensions: &[S]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| {
            let ext = ext.as_ref().to_lowercase();
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}

/// Keeps the files whose extension is one of `extensions`, ignoring case.
///
/// Extensions may be given with or without the leading dot. With no
/// extensions the input is returned unchanged.
pub fn filter_by_extension<S: AsRef<str>>(files: Vec<Entry>, extensions: &[S]) -> Vec<Entry> {
    if extensions.is_empty() {
        return files;
    }
    retain_extensions(files, &normalize_extensions(extensions))
}

fn retain_extensions(files: Vec<Entry>, normalized: &[String]) -> Vec<Entry> {
    files
        .into_iter()
        .filter(|f| f.suffix().is_some_and(|s| normalized.contains(&s)))
        .collect()
}

/// Filter form of [`filter_by_extension`].
pub fn extension_filter<S: AsRef<str>>(extensions: &[S]) -> FilterFn {
    if extensions.is_empty() {
        return Box::new(|files: Vec<Entry>| files);
    }
    let normalized = normalize_extensions(extensions);
    Box::new(move |files: Vec<Entry>| retain_extensions(files, &normalized))
}

/// Keeps files whose size lies within the inclusive bounds.
///
/// A missing bound is not checked. Files whose size cannot be read are dropped.
pub fn size_filter(min_size: Option<u64>, max_size: Option<u64>) -> FilterFn {
    Box::new(move |files: Vec<Entry>| {
        files
            .into_iter()
            .filter(|f| match f.size() {
                Ok(size) => {
                    min_size.is_none_or(|min| size >= min) && max_size.is_none_or(|max| size <= max)
                }
                Err(_) => false,
            })
            .collect()
    })
}

/// Drops files whose path matches any of the exclude patterns.
///
/// Patterns go through [`expand_exclude_patterns`] first.
///
/// # Errors
/// Returns [`ScanError::InvalidPattern`] if a pattern does not compile.
pub fn exclude_filter<S: AsRef<str>>(patterns: &[S]) -> Result<FilterFn> {
    let matcher = build_exclude_matcher(&expand_exclude_patterns(patterns))?;
    Ok(Box::new(move |files: Vec<Entry>| {
        files
            .into_iter()
            .filter(|f| !matcher.is_match(&f.path))
            .collect()
    }))
}

/// Expands exclude patterns into common glob forms:
/// For example, "node_modules" becomes:
///   - `**/node_modules`
///   - `**/node_modules/**`
///     unless the pattern already includes glob symbols or extensions.
pub fn expand_exclude_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<String> {
    let mut expanded = Vec::new();

    for pat in patterns {
        let pat = pat.as_ref().trim();
        if pat.contains('*') || pat.ends_with('/') || pat.contains('.') {
            expanded.push(pat.to_string());
        } else {
            expanded.push(format!("**/{}", pat));
            expanded.push(format!("**/{}/**", pat));
        }
    }

    expanded
}

/// Compiles a list of glob patterns into a `GlobSet` matcher,
/// which can be used to test paths efficiently.
pub fn build_exclude_matcher(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ScanError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ScanError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}
