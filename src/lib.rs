//! swapview - per-process swap usage for Linux
//!
//! This library scans a `/proc`-style root, sums the `Swap:` fields of every
//! process's smaps and merges the results from a bounded worker pool into one
//! list that can be rendered as a table or JSON.
//!
//! # Usage
//!
//! ```rust,no_run
//! use swapview::{render, Collector, ReportFormat};
//!
//! let collection = Collector::new("/proc", 4).collect()?;
//! let mut out = std::io::stdout().lock();
//! render(&mut out, collection.records, ReportFormat::Table)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod format;
pub mod process;
pub mod report;
pub mod startup_checks;

// Re-export main types for convenience
pub use collector::{Collection, Collector, DEFAULT_PROC_ROOT, MAX_PARALLELISM};
pub use error::CollectError;
pub use format::format_size;
pub use process::{ProbeOutcome, ProcessSwapRecord};
pub use report::{render, ReportFormat};
