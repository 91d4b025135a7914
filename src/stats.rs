//! Cumulative scan statistics for a [`PathScanner`](crate::PathScanner).

use serde::{Deserialize, Serialize};

/// Counters accumulated across every scan a scanner performs.
///
/// Only fresh scans add to `total_scans` and the found counts; a cache hit
/// only bumps `cache_hits`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStatistics {
    /// Scans that listed the filesystem
    pub total_scans: u64,
    /// Files returned by those scans, counted after filtering
    pub total_files_found: u64,
    /// Folders returned by those scans
    pub total_folders_found: u64,
    /// Scans answered from the cache
    pub cache_hits: u64,
}

impl ScanStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one fresh scan that produced `files` files and `folders` folders.
    pub fn record_scan(&mut self, files: usize, folders: usize) {
        self.total_scans += 1;
        self.total_files_found += files as u64;
        self.total_folders_found += folders as u64;
    }

    pub fn record_cache_hit(&mut self) {
        self.cache_hits += 1;
    }

    /// Fraction of scan requests served from the cache, `0.0` before any request.
    pub fn cache_hit_rate(&self) -> f64 {
        let requests = self.total_scans + self.cache_hits;
        if requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / requests as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_scan_and_hits() {
        let mut stats = ScanStatistics::new();
        stats.record_scan(3, 2);
        stats.record_scan(1, 0);
        stats.record_cache_hit();

        assert_eq!(stats.total_scans, 2);
        assert_eq!(stats.total_files_found, 4);
        assert_eq!(stats.total_folders_found, 2);
        assert_eq!(stats.cache_hits, 1);
        assert!((stats.cache_hit_rate() - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_rate_without_requests() {
        assert_eq!(ScanStatistics::default().cache_hit_rate(), 0.0);
    }

    #[test]
    fn test_serializes_to_json() {
        let mut stats = ScanStatistics::new();
        stats.record_scan(5, 1);
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["total_files_found"], 5);
        assert_eq!(json["cache_hits"], 0);
    }
}
