//! Process scanning utilities for discovering and probing process entries in /proc.
//!
//! Enumeration takes a single snapshot of the root directory. Each candidate
//! name is then probed on its own: parsed as a pid, its cmdline decoded and its
//! smaps swap total summed. A probe that loses the race with process exit
//! produces no record.

use crate::process::memory::read_swap_bytes;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Separator between arguments in /proc/<pid>/cmdline.
const CMDLINE_SEPARATOR: u8 = 0;

/// Swap usage of one process at probe time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessSwapRecord {
    pub pid: u32,
    pub swap_bytes: u64,
    pub command: String,
}

/// Which per-process file could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Cmdline(io::ErrorKind),
    Smaps(io::ErrorKind),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Cmdline(kind) => write!(f, "cmdline unreadable ({})", kind),
            SkipReason::Smaps(kind) => write!(f, "smaps unreadable ({})", kind),
        }
    }
}

/// Result of probing one directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Record(ProcessSwapRecord),
    /// Entry name is not a pid.
    NotProcess,
    /// Process vanished or is not readable.
    Skipped { pid: u32, reason: SkipReason },
}

/// Reads the names of all entries directly under `root`.
///
/// This is the only fatal step of a scan: callers get the io error if the root
/// itself cannot be listed. Entries whose names are not valid UTF-8 are dropped
/// since they cannot be pids.
pub fn list_candidates(root: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    Ok(names)
}

/// Parses a directory entry name as a positive pid.
pub fn parse_pid(name: &str) -> Option<u32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match name.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(pid) => Some(pid),
    }
}

/// Turns raw cmdline bytes into a display string.
///
/// One trailing separator is stripped, every remaining separator becomes a space.
pub fn decode_cmdline(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(&[CMDLINE_SEPARATOR]).unwrap_or(raw);
    let joined: Vec<u8> = raw
        .iter()
        .map(|&b| if b == CMDLINE_SEPARATOR { b' ' } else { b })
        .collect();
    String::from_utf8_lossy(&joined).into_owned()
}

/// Reads and decodes /proc/[pid]/cmdline. Kernel threads yield an empty string.
pub fn read_cmdline(proc_path: &Path) -> io::Result<String> {
    let raw = fs::read(proc_path.join("cmdline"))?;
    Ok(decode_cmdline(&raw))
}

/// Probes a single entry of the process root.
pub fn probe(root: &Path, name: &str) -> ProbeOutcome {
    let pid = match parse_pid(name) {
        Some(pid) => pid,
        None => return ProbeOutcome::NotProcess,
    };
    let proc_path = root.join(name);

    let command = match read_cmdline(&proc_path) {
        Ok(command) => command,
        Err(e) => {
            return ProbeOutcome::Skipped {
                pid,
                reason: SkipReason::Cmdline(e.kind()),
            }
        }
    };

    let swap_bytes = match read_swap_bytes(&proc_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return ProbeOutcome::Skipped {
                pid,
                reason: SkipReason::Smaps(e.kind()),
            }
        }
    };

    ProbeOutcome::Record(ProcessSwapRecord {
        pid,
        swap_bytes,
        command,
    })
}
