//! Cache module for dirscan
//!
//! This module keeps the results of single-pass scans in memory so that a
//! [`PathScanner`](crate::PathScanner) can answer repeated scans of the same
//! directory without touching the filesystem again.
//!
//! Entries are never invalidated by filesystem changes. A cached result is
//! what the scan returned when it was stored; call [`ScanCache::clear`] to
//! force fresh listings.

pub mod model;


use std::collections::HashMap;

use crate::data::ScanResult;

pub use model::CacheKey;

/// In-memory map from [`CacheKey`] to the result stored for it.
#[derive(Debug, Clone, Default)]
pub struct ScanCache {
    entries: HashMap<CacheKey, ScanResult>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the result stored under `key`, if any.
    pub fn get(&self, key: &CacheKey) -> Option<ScanResult> {
        self.entries.get(key).cloned()
    }

    /// Stores `result` under `key`, replacing any previous result.
    pub fn insert(&mut self, key: CacheKey, result: ScanResult) {
        self.entries.insert(key, result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
