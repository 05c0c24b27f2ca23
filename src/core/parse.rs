//! Frame-time parsing
//!
//! Numeric literals cut out of filenames are parsed into a `Time` for
//! value-based comparison. A literal that cannot be represented (overflow,
//! malformed run) degrades to `0` instead of failing the scan of the whole
//! filename; the literal itself is kept elsewhere so padding analysis still
//! works on it.

use thiserror::Error;

/// Position of a file inside a sequence (its frame number).
///
/// Signed because numeric runs may carry a `-`/`+` prefix; 64 bits so real
/// frame counters never overflow in practice.
pub type Time = i64;

/// A numeric literal that could not be turned into a [`Time`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    /// The literal contains something other than an optionally signed digit run.
    #[error("not a numeric literal: {0:?}")]
    Malformed(String),

    /// The literal is a well-formed digit run but exceeds the `Time` range.
    #[error("numeric literal out of range: {0:?}")]
    OutOfRange(String),
}

/// Parse a numeric literal into a [`Time`].
///
/// Accepts an optional leading `+`/`-` followed by decimal digits, exactly
/// the shape produced by [`crate::core::scan::scan_numbers`]. Distinguishes
/// malformed input from overflow so callers can tell a genuine `0` apart
/// from a degraded parse.
pub fn parse_time(literal: &str) -> Result<Time, ParseTimeError> {
    if !is_numeric_literal(literal) {
        return Err(ParseTimeError::Malformed(literal.to_string()));
    }
    literal
        .parse::<Time>()
        .map_err(|_| ParseTimeError::OutOfRange(literal.to_string()))
}

/// Parse a numeric literal, substituting `0` on failure.
///
/// The degraded-parse arm of the two-class error model: overflow and
/// malformed runs are recoverable here, never surfaced to the caller.
pub fn time_or_zero(literal: &str) -> Time {
    parse_time(literal).unwrap_or(0)
}

/// Whether `s` is an optionally signed, non-empty digit run.
fn is_numeric_literal(s: &str) -> bool {
    let digits = match s.strip_prefix(['+', '-']) {
        // A lone sign character is not a number.
        Some(rest) => rest,
        None => s,
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_plain() {
        assert_eq!(parse_time("42"), Ok(42));
        assert_eq!(parse_time("0"), Ok(0));
        assert_eq!(parse_time("0001"), Ok(1));
    }

    #[test]
    fn test_parse_time_signed() {
        assert_eq!(parse_time("-42"), Ok(-42));
        assert_eq!(parse_time("+42"), Ok(42));
        assert_eq!(parse_time("-007"), Ok(-7));
    }

    #[test]
    fn test_parse_time_malformed() {
        assert!(matches!(parse_time(""), Err(ParseTimeError::Malformed(_))));
        assert!(matches!(parse_time("-"), Err(ParseTimeError::Malformed(_))));
        assert!(matches!(parse_time("+"), Err(ParseTimeError::Malformed(_))));
        assert!(matches!(
            parse_time("12a"),
            Err(ParseTimeError::Malformed(_))
        ));
        assert!(matches!(
            parse_time("1.5"),
            Err(ParseTimeError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_time_overflow() {
        // 25 digits, far past i64.
        let huge = "9999999999999999999999999";
        assert!(matches!(
            parse_time(huge),
            Err(ParseTimeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_time_or_zero_degrades() {
        assert_eq!(time_or_zero("9999999999999999999999999"), 0);
        assert_eq!(time_or_zero("not-a-number"), 0);
        assert_eq!(time_or_zero("-"), 0);
    }

    #[test]
    fn test_time_or_zero_passthrough() {
        assert_eq!(time_or_zero("0100"), 100);
        assert_eq!(time_or_zero("-3"), -3);
    }
}
