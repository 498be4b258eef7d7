//! Human-readable byte sizes with binary prefixes.

const UNITS: [&str; 5] = ["", "K", "M", "G", "T"];

/// Magnitude above which a value is promoted to the next unit.
const PROMOTE_THRESHOLD: f64 = 1100.0;

/// Formats a byte count as `"512B"`, `"1.1KiB"`, `"3.4GiB"` and so on.
///
/// Bytes are printed without decimals, scaled units with one decimal place.
pub fn format_size(bytes: u64) -> String {
    let mut unit = 0;
    let mut value = bytes as f64;
    while unit + 1 < UNITS.len() && value > PROMOTE_THRESHOLD {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{}B", bytes)
    } else {
        format!("{:.1}{}iB", value, UNITS[unit])
    }
}
