//! Formatting helpers for reporting media metadata.

/// Formats a byte count as megabytes with two decimals, using the binary
/// 1024*1024 divisor (e.g., 78643200 -> "75.00 MB").
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const MB: f64 = 1024.0 * 1024.0;
    format!("{:.2} MB", bytes as f64 / MB)
}

/// Formats an optional bitrate in bits per second, with "n/a" when absent.
#[must_use]
pub fn format_bitrate(bitrate_bps: Option<u64>) -> String {
    match bitrate_bps {
        Some(bps) => format!("{bps} bps"),
        None => "n/a".to_string(),
    }
}
