//! frameseq - Numeric-token core for detecting file sequences in directory listings
//!
//! frameseq provides:
//! - Extraction of numeric runs from a filename (`scan_numbers`, `FrameNumbers::from_filename`)
//! - Padding and digit-count analysis of numeric literals (`padding`, `digit_count`)
//! - An aligned ordering over token vectors for sorting sequence candidates (`cmp_aligned`)
//! - A value-only range equality for bucketing filenames into sequences (`range_equals`)
//!
//! The crate deliberately stops at the numeric-token model: directory
//! traversal, glob matching, range compression and any CLI belong to the
//! callers that feed it filenames and consume its grouping decisions.

pub mod core;

pub use crate::core::numbers::{digit_count, padding, FrameNumbers, NumberToken};
pub use crate::core::parse::{parse_time, time_or_zero, ParseTimeError, Time};
pub use crate::core::scan::scan_numbers;
