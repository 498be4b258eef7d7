//! Runtime requirement validation for swapview.
//!
//! Verifies that the process root can be listed and that per-process files are
//! readable with the current privileges.

use nix::unistd::geteuid;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::process::{list_candidates, parse_pid, read_cmdline, read_swap_bytes};

/// Summary of a successful requirements check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub processes: usize,
    pub readable: usize,
    pub root_privileges: bool,
}

/// Validate all runtime requirements
pub fn validate_requirements(root: &Path) -> Result<CheckReport, ValidationError> {
    info!("Validating runtime requirements for {}", root.display());

    let root_privileges = check_user_privileges();
    let (processes, readable) = check_proc_access(root)?;

    Ok(CheckReport {
        processes,
        readable,
        root_privileges,
    })
}

/// Check if running with sufficient privileges
fn check_user_privileges() -> bool {
    if geteuid().is_root() {
        info!("Running as root (uid=0)");
        true
    } else {
        warn!("Not running as root - swap of other users' processes may be missing");
        false
    }
}

/// Lists the root and counts processes whose cmdline and smaps can both be read.
fn check_proc_access(root: &Path) -> Result<(usize, usize), ValidationError> {
    let names = list_candidates(root).map_err(|e| ValidationError::RootUnreadable {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut processes = 0;
    let mut readable = 0;
    for name in &names {
        if parse_pid(name).is_none() {
            continue;
        }
        processes += 1;
        let proc_path = root.join(name);
        if read_cmdline(&proc_path).is_ok() && read_swap_bytes(&proc_path).is_ok() {
            readable += 1;
        }
    }

    if processes == 0 {
        return Err(ValidationError::NoProcesses(root.to_path_buf()));
    }
    if readable == 0 {
        return Err(ValidationError::NothingReadable(root.to_path_buf()));
    }
    if readable < processes {
        warn!(
            "{} of {} processes are not readable",
            processes - readable,
            processes
        );
    }
    Ok((processes, readable))
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("cannot list {}: {reason}", path.display())]
    RootUnreadable { path: PathBuf, reason: String },

    #[error("no process entries found under {}", .0.display())]
    NoProcesses(PathBuf),

    #[error("no process under {} has readable cmdline and smaps", .0.display())]
    NothingReadable(PathBuf),
}
