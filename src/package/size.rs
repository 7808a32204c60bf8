//! Human-readable installed sizes.
//!
//! pacman reports sizes like `12.50 MiB`; the store and reports work in bytes.

use crate::error::{PacsortError, Result};

const UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Parse a pacman size string into bytes.
pub fn parse_size(value: &str) -> Result<u64> {
    let invalid = || PacsortError::InvalidSize {
        value: value.to_string(),
    };

    let mut parts = value.split_whitespace();
    let number: f64 = parts
        .next()
        .and_then(|n| n.parse().ok())
        .ok_or_else(invalid)?;
    let unit = parts.next().unwrap_or("B");
    if parts.next().is_some() || number < 0.0 || !number.is_finite() {
        return Err(invalid());
    }

    let exponent = UNITS
        .iter()
        .position(|u| u.eq_ignore_ascii_case(unit))
        .ok_or_else(invalid)?;

    Ok((number * 1024f64.powi(exponent as i32)).round() as u64)
}

/// Format a byte count the way pacman does (two decimals, binary units).
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pacman_units() {
        assert_eq!(parse_size("0.00 B").unwrap(), 0);
        assert_eq!(parse_size("512.00 B").unwrap(), 512);
        assert_eq!(parse_size("1.50 KiB").unwrap(), 1536);
        assert_eq!(parse_size("2.00 MiB").unwrap(), 2 * 1024 * 1024);
        assert_eq!(parse_size("1.00 GiB").unwrap(), 1024 * 1024 * 1024);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_size("").is_err());
        assert!(parse_size("lots").is_err());
        assert!(parse_size("12 parsecs").is_err());
        assert!(parse_size("-1 MiB").is_err());
        assert!(parse_size("1 MiB extra").is_err());
    }

    #[test]
    fn formats_with_binary_units() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1536), "1.50 KiB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MiB");
    }
}
