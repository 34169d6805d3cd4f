//! Elapsed-time reporting.
//!
//! The benchmark's entire stdout contract is a single line: elapsed seconds
//! as a fixed-point number with 15 fractional digits, right-justified in a
//! 20-character field.

use std::io;
use std::time::Duration;

/// Format an elapsed duration as seconds, fixed-point, 15 fractional digits,
/// space-padded to a field width of 20.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:>20.15}", elapsed.as_secs_f64())
}

/// Write the formatted elapsed line (plus newline) to `out`.
pub fn write_elapsed<W: io::Write>(mut out: W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "{}", format_elapsed(elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifteen_fractional_digits_width_twenty() {
        let line = format_elapsed(Duration::from_millis(1500));
        assert_eq!(line.len(), 20);
        assert_eq!(line, "   1.500000000000000");
    }

    #[test]
    fn test_shape_matches_contract() {
        // ^\s*\d+\.\d{15}$
        let line = format_elapsed(Duration::from_nanos(123_456_789));
        let trimmed = line.trim_start();
        let (whole, frac) = trimmed.split_once('.').unwrap();
        assert!(!whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(frac.len(), 15);
        assert!(frac.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(trimmed, "0.123456789000000");
    }

    #[test]
    fn test_wide_values_overflow_field_without_truncation() {
        let line = format_elapsed(Duration::from_secs(123_456));
        assert_eq!(line, "123456.000000000000000");
    }

    #[test]
    fn test_write_appends_newline() {
        let mut buf = Vec::new();
        write_elapsed(&mut buf, Duration::from_secs(2)).unwrap();
        assert_eq!(buf, b"   2.000000000000000\n");
    }
}
