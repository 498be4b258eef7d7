//! Process-related modules for swap collection.
//!
//! This module provides:
//! - `memory`: Swap parsing from /proc/<pid>/smaps
//! - `scanner`: Process discovery and per-process probing

pub mod memory;
pub mod scanner;

// Re-export commonly used types
pub use memory::{read_swap_bytes, scan_digits, sum_swap_bytes, SWAP_PREFIX};
pub use scanner::{
    decode_cmdline, list_candidates, parse_pid, probe, read_cmdline, ProbeOutcome,
    ProcessSwapRecord, SkipReason,
};
