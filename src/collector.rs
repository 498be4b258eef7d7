//! Concurrent swap collection over a process root.
//!
//! The collector takes one snapshot of the root listing and probes every entry
//! on a dedicated, fixed-size rayon pool. Records move by value out of each
//! worker and rayon concatenates them, so the merged list holds exactly one
//! record per successful probe regardless of completion order.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::error::CollectError;
use crate::process::{list_candidates, probe, ProbeOutcome, ProcessSwapRecord};

/// Default process root.
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Upper bound for the worker pool size.
pub const MAX_PARALLELISM: usize = 1024;

/// Outcome of one full scan.
#[derive(Debug, Default)]
pub struct Collection {
    /// Unordered records, one per successfully probed process.
    pub records: Vec<ProcessSwapRecord>,
    /// Number of entries listed under the root.
    pub candidates: usize,
    /// Entries whose name was not a pid.
    pub not_processes: usize,
    /// Pids whose cmdline or smaps could not be read.
    pub skipped: usize,
}

/// Probes all processes under a root with a bounded worker pool.
#[derive(Debug, Clone)]
pub struct Collector {
    root: PathBuf,
    parallelism: usize,
}

impl Collector {
    /// Creates a collector. A parallelism of 0 means one worker per CPU.
    pub fn new(root: impl Into<PathBuf>, parallelism: usize) -> Self {
        Self {
            root: root.into(),
            parallelism: parallelism.min(MAX_PARALLELISM),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Runs one scan to completion.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn collect(&self) -> Result<Collection, CollectError> {
        let start = Instant::now();

        let names = list_candidates(&self.root).map_err(|source| CollectError::ReadRoot {
            path: self.root.clone(),
            source,
        })?;
        debug!("Collected {} entries from {}", names.len(), self.root.display());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.parallelism)
            .thread_name(|i| format!("swapview-probe-{}", i))
            .build()
            .map_err(|source| CollectError::ThreadPool {
                threads: self.parallelism,
                source,
            })?;

        let not_processes = AtomicUsize::new(0);
        let skipped = AtomicUsize::new(0);

        let records: Vec<ProcessSwapRecord> = pool.install(|| {
            names
                .par_iter()
                .filter_map(|name| match probe(&self.root, name) {
                    ProbeOutcome::Record(record) => Some(record),
                    ProbeOutcome::NotProcess => {
                        not_processes.fetch_add(1, Ordering::Relaxed);
                        None
                    }
                    ProbeOutcome::Skipped { pid, reason } => {
                        debug!("Skipping process {}: {}", pid, reason);
                        skipped.fetch_add(1, Ordering::Relaxed);
                        None
                    }
                })
                .collect()
        });

        let collection = Collection {
            candidates: names.len(),
            not_processes: not_processes.load(Ordering::Relaxed),
            skipped: skipped.load(Ordering::Relaxed),
            records,
        };

        info!(
            "Scan completed in {:.2}ms: {} records, {} skipped, {} non-process entries",
            start.elapsed().as_secs_f64() * 1000.0,
            collection.records.len(),
            collection.skipped,
            collection.not_processes
        );
        if collection.records.is_empty() && collection.skipped > 0 {
            warn!(
                "All {} process probes were skipped - insufficient permissions?",
                collection.skipped
            );
        }

        Ok(collection)
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parallelism_is_capped() {
        let collector = Collector::new("/proc", MAX_PARALLELISM * 4);
        assert_eq!(collector.parallelism, MAX_PARALLELISM);
    }

    #[test]
    fn test_default_root() {
        assert_eq!(Collector::default().root(), Path::new(DEFAULT_PROC_ROOT));
    }

    #[test]
    fn test_collect_counts() {
        let tmp = TempDir::new().unwrap();
        let p = tmp.path().join("10");
        fs::create_dir(&p).unwrap();
        fs::write(p.join("cmdline"), b"init\0").unwrap();
        fs::write(p.join("smaps"), "Swap: 2 kB\n").unwrap();
        fs::create_dir(tmp.path().join("11")).unwrap();
        fs::write(tmp.path().join("uptime"), "1.0 1.0\n").unwrap();

        let collection = Collector::new(tmp.path(), 2).collect().unwrap();
        assert_eq!(collection.candidates, 3);
        assert_eq!(collection.records.len(), 1);
        assert_eq!(collection.skipped, 1);
        assert_eq!(collection.not_processes, 1);
    }

    #[test]
    fn test_collect_missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = Collector::new(tmp.path().join("missing"), 1)
            .collect()
            .unwrap_err();
        assert!(matches!(err, CollectError::ReadRoot { .. }));
    }
}
