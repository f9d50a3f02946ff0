// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Byte count formatting.

const BINARY_UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
const DECIMAL_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Human readable byte count.
///
/// Values below one kilo unit print as an integer number of bytes; larger
/// values are scaled to the largest unit not exceeding them and printed with
/// `precision` decimals.
///
/// ```
/// use vkcaps::units::format_bytes;
///
/// assert_eq!(format_bytes(512, 2, true), "512 B");
/// assert_eq!(format_bytes(128 * 1024 * 1024, 2, true), "128.00 MiB");
/// assert_eq!(format_bytes(1_500_000, 1, false), "1.5 MB");
/// ```
pub fn format_bytes(bytes: u64, precision: usize, binary: bool) -> String {
    let (base, units) = if binary {
        (1024.0, &BINARY_UNITS)
    } else {
        (1000.0, &DECIMAL_UNITS)
    };

    let mut value = bytes as f64;
    if value < base {
        return format!("{} B", bytes);
    }

    let mut unit = 0;
    while value >= base && unit + 1 < units.len() {
        value /= base;
        unit += 1;
    }
    format!("{:.*} {}", precision, value, units[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_one_unit() {
        assert_eq!(format_bytes(0, 2, true), "0 B");
        assert_eq!(format_bytes(1023, 2, true), "1023 B");
        assert_eq!(format_bytes(999, 2, false), "999 B");
    }

    #[test]
    fn test_binary_units() {
        assert_eq!(format_bytes(1024, 2, true), "1.00 KiB");
        assert_eq!(format_bytes(1536, 1, true), "1.5 KiB");
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024, 2, true), "2.00 GiB");
        assert_eq!(format_bytes(u32::MAX as u64, 2, true), "4.00 GiB");
    }

    #[test]
    fn test_decimal_units() {
        assert_eq!(format_bytes(1000, 0, false), "1 KB");
        assert_eq!(format_bytes(8_000_000_000, 2, false), "8.00 GB");
    }

    #[test]
    fn test_largest_unit_saturates() {
        assert_eq!(format_bytes(u64::MAX, 0, true), "16384 PiB");
    }
}
