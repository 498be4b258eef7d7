//! Integration tests for report rendering.
//!
//! These tests run a scan over a synthetic root and check the rendered
//! table end to end.

use std::fs;

use swapview::{format_size, render, Collector, ProcessSwapRecord, ReportFormat};
use tempfile::TempDir;

fn rec(pid: u32, swap_bytes: u64, command: &str) -> ProcessSwapRecord {
    ProcessSwapRecord {
        pid,
        swap_bytes,
        command: command.to_string(),
    }
}

#[test]
fn test_render_orders_ascending_with_total() {
    let records = vec![rec(30, 300, "c"), rec(10, 100, "a"), rec(20, 200, "b")];
    let mut out = Vec::new();
    let total = render(&mut out, records, ReportFormat::Table).unwrap();
    assert_eq!(total, 600);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "  PID      SWAP COMMAND");
    assert_eq!(lines[1], "   10      100B a");
    assert_eq!(lines[2], "   20      200B b");
    assert_eq!(lines[3], "   30      300B c");
    assert_eq!(lines[4], format!("Total: {:>8}", format_size(600)));
}

#[test]
fn test_zero_swap_rows_are_printed() {
    let records = vec![rec(1, 0, "idle"), rec(2, 0, "")];
    let mut out = Vec::new();
    render(&mut out, records, ReportFormat::Table).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.ends_with("Total:       0B\n"));
}

#[test]
fn test_scan_and_render_table() {
    let tmp = TempDir::new().unwrap();
    for (pid, kb, cmd) in [(100u32, 2048u64, "big"), (7, 0, "none"), (55, 2, "small")] {
        let dir = tmp.path().join(pid.to_string());
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("cmdline"), format!("{}\0--flag\0", cmd)).unwrap();
        fs::write(dir.join("smaps"), format!("Size: 8 kB\nSwap: {} kB\n", kb)).unwrap();
    }
    fs::write(tmp.path().join("meminfo"), "SwapTotal: 1 kB\n").unwrap();

    let collection = Collector::new(tmp.path(), 3).collect().unwrap();
    let mut out = Vec::new();
    let total = render(&mut out, collection.records, ReportFormat::Table).unwrap();
    assert_eq!(total, (2048 + 2) * 1024);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "  PID      SWAP COMMAND\n\
         \x20   7        0B none --flag\n\
         \x20  55    2.0KiB small --flag\n\
         \x20 100    2.0MiB big --flag\n\
         Total:   2.0MiB\n"
    );
}
