//! Numeric-run extraction
//!
//! Scans a filename left to right for maximal digit runs, optionally
//! sign-prefixed:
//! `cam1_f0100.jpg` -> `["1", "0100"]`
//! `v-10.png`       -> `["-10"]`
//!
//! The runs keep their exact spelling (leading zeros, sign, width) so the
//! padding analysis downstream sees what was actually on disk.

use once_cell::sync::Lazy;
use regex::Regex;

/// Static regex for numeric runs inside a filename.
/// Format: optional sign, then one or more decimal digits.
static NUMBER_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]?[0-9]+").expect("Invalid NUMBER_RUN_RE regex"));

/// Extract every numeric run from `filename`, in order of appearance.
///
/// Returns borrowed slices of the input; an empty vector means the filename
/// carries no digits at all and cannot belong to any sequence.
pub fn scan_numbers(filename: &str) -> Vec<&str> {
    NUMBER_RUN_RE
        .find_iter(filename)
        .map(|m| m.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_run() {
        assert_eq!(scan_numbers("img_0001.png"), vec!["0001"]);
    }

    #[test]
    fn test_scan_multiple_runs_in_order() {
        assert_eq!(scan_numbers("cam1_f0100.jpg"), vec!["1", "0100"]);
        assert_eq!(scan_numbers("s01e02_take3.mov"), vec!["01", "02", "3"]);
    }

    #[test]
    fn test_scan_no_digits() {
        assert!(scan_numbers("readme.txt").is_empty());
        assert!(scan_numbers("").is_empty());
    }

    #[test]
    fn test_scan_sign_prefix() {
        // A dash directly before digits is read as a sign.
        assert_eq!(scan_numbers("v-10.png"), vec!["-10"]);
        assert_eq!(scan_numbers("offset+05.exr"), vec!["+05"]);
    }

    #[test]
    fn test_scan_runs_are_maximal() {
        assert_eq!(scan_numbers("a1200b"), vec!["1200"]);
        assert_eq!(scan_numbers("000"), vec!["000"]);
    }

    #[test]
    fn test_scan_preserves_spelling() {
        let runs = scan_numbers("shot_007_0042.png");
        assert_eq!(runs, vec!["007", "0042"]);
    }
}
