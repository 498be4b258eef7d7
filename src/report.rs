//! Report rendering for collected swap records.
//!
//! Records are sorted ascending by swap size and written either as the classic
//! fixed-width table or as JSON. Both carry the grand total.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::format::format_size;
use crate::process::ProcessSwapRecord;

/// Output surface for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    pid: u32,
    swap_bytes: u64,
    swap: String,
    command: &'a str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    processes: Vec<JsonRow<'a>>,
    total_bytes: u64,
    total: String,
}

/// Sorts records ascending by swap usage. Ties keep no particular order.
pub fn sort_records(records: &mut [ProcessSwapRecord]) {
    records.sort_unstable_by_key(|r| r.swap_bytes);
}

fn total_bytes(records: &[ProcessSwapRecord]) -> u64 {
    records
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.swap_bytes))
}

/// Writes the fixed-width table for already sorted records and returns the total.
pub fn write_table<W: Write>(out: &mut W, records: &[ProcessSwapRecord]) -> io::Result<u64> {
    writeln!(out, "{:>5} {:>9} {}", "PID", "SWAP", "COMMAND")?;
    let mut total: u64 = 0;
    for r in records {
        writeln!(out, "{:>5} {:>9} {}", r.pid, format_size(r.swap_bytes), r.command)?;
        total = total.saturating_add(r.swap_bytes);
    }
    writeln!(out, "Total: {:>8}", format_size(total))?;
    Ok(total)
}

/// Writes already sorted records as a JSON document and returns the total.
pub fn write_json<W: Write>(out: &mut W, records: &[ProcessSwapRecord]) -> io::Result<u64> {
    let total = total_bytes(records);
    let report = JsonReport {
        processes: records
            .iter()
            .map(|r| JsonRow {
                pid: r.pid,
                swap_bytes: r.swap_bytes,
                swap: format_size(r.swap_bytes),
                command: &r.command,
            })
            .collect(),
        total_bytes: total,
        total: format_size(total),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(total)
}

/// Sorts the records and writes them in the requested format.
pub fn render<W: Write>(
    out: &mut W,
    mut records: Vec<ProcessSwapRecord>,
    format: ReportFormat,
) -> io::Result<u64> {
    sort_records(&mut records);
    match format {
        ReportFormat::Table => write_table(out, &records),
        ReportFormat::Json => write_json(out, &records),
    }
}
