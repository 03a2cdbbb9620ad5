// SPDX-License-Identifier: MPL-2.0
//! Human readable file sizes.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count using 1024-based units up to GB.
///
/// Values keep at most two decimals with trailing zeros trimmed
/// (`1.5 KB`, `2 MB`, `0 Bytes`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}
