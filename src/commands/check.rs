//! Check command implementation.
//!
//! Validates that swap data can actually be collected on this host.

use swapview::config::{validate_effective_config, Config};
use swapview::startup_checks::validate_requirements;

/// Validates runtime requirements and configuration.
pub fn command_check(config: &Config) -> anyhow::Result<()> {
    println!("swapview - System Check");
    println!("=======================");

    let mut all_ok = true;
    let root = config.proc_root();

    println!("\nChecking {}...", root.display());
    match validate_requirements(&root) {
        Ok(report) => {
            println!("   OK  {} process entries found", report.processes);
            println!(
                "   OK  {} of {} processes readable",
                report.readable, report.processes
            );
            if !report.root_privileges {
                println!("   WARN  not running as root, other users' processes may be missing");
            }
        }
        Err(e) => {
            println!("   FAIL  {}", e);
            all_ok = false;
        }
    }

    println!("\nChecking configuration...");
    match validate_effective_config(config) {
        Ok(_) => println!("   OK  Configuration is valid"),
        Err(e) => {
            println!("   FAIL  Configuration invalid: {}", e);
            all_ok = false;
        }
    }

    println!("\nSummary:");
    if all_ok {
        println!("   All checks passed");
        Ok(())
    } else {
        println!("   Some checks failed");
        std::process::exit(1);
    }
}
