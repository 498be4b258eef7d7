//! Swap parsing utilities for reading per-process swap usage from /proc.
//!
//! This module sums the `Swap:` field of every mapping listed in
//! `/proc/<pid>/smaps`. The kernel reports each value in kibibytes.

use std::fs;
use std::path::Path;

/// Line prefix of the per-mapping swap field in smaps.
pub const SWAP_PREFIX: &[u8] = b"Swap:";

/// Accumulates every ASCII digit of a line into one number.
///
/// All other bytes are ignored, so `"Swap:   12 kB"` yields 12 and a line
/// without digits yields 0. Overflow wraps instead of panicking.
pub fn scan_digits(line: &[u8]) -> u64 {
    line.iter()
        .filter(|b| b.is_ascii_digit())
        .fold(0u64, |acc, &b| {
            acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0'))
        })
}

/// Sums all `Swap:` lines of raw smaps content and returns the total in bytes.
pub fn sum_swap_bytes(content: &[u8]) -> u64 {
    let swap_kb = content
        .split(|&b| b == b'\n')
        .filter(|line| line.starts_with(SWAP_PREFIX))
        .map(scan_digits)
        .fold(0u64, u64::saturating_add);

    swap_kb.saturating_mul(1024)
}

/// Reads /proc/[pid]/smaps and returns swap usage in bytes.
pub fn read_swap_bytes(proc_path: &Path) -> Result<u64, std::io::Error> {
    let content = fs::read(proc_path.join("smaps"))?;
    Ok(sum_swap_bytes(&content))
}
