//! Error types for swap collection.
//!
//! Only failures that abort a whole run live here. Per-process read failures are
//! expected while the process table changes underneath a scan and are reported as
//! [`crate::process::ProbeOutcome`] values instead.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("cannot read process root {}: {source}", path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build worker pool with {threads} threads: {source}")]
    ThreadPool {
        threads: usize,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}
