//! The ordered numeric-token vector
//!
//! Each number found in a filename can be a time inside a sequence. A
//! [`FrameNumbers`] holds those numbers in order of appearance, keeping both
//! the parsed value and the verbatim literal, so two filenames that share a
//! non-numeric skeleton can be compared position by position: same values
//! outside the varying slot means same sequence, and padding-aware ordering
//! keeps `img_10` out of the `img_0001`/`img_0002` bucket even though 10 is
//! numerically larger.
//!
//! Lifecycle is build-then-freeze: push runs while scanning one filename,
//! then only compare; `clear` recycles the allocation for the next filename.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::parse::{time_or_zero, Time};
use crate::core::scan::scan_numbers;

/// Runs to reserve per vector; filenames rarely carry more numbers than this.
const RESERVED_RUNS: usize = 10;

/// One numeric run cut out of a filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberToken {
    /// Parsed value; `0` when the literal could not be represented.
    pub time: Time,

    /// The run exactly as it appeared, leading zeros and sign included.
    pub literal: String,
}

/// Whether `s` starts with a sign character that actually marks a sign.
///
/// A one-character string is never signed: a lone `-`/`+` is taken as a
/// bare (malformed) digit rather than a sign with nothing after it.
fn has_sign(s: &str) -> bool {
    s.len() > 1 && matches!(s.as_bytes()[0], b'+' | b'-')
}

/// Digit count of a numeric literal, excluding an optional leading sign.
pub fn digit_count(literal: &str) -> usize {
    literal.len() - has_sign(literal) as usize
}

/// Zero-padding width implied by a numeric literal.
///
/// `0` means not padded: single-digit literals are never considered padded,
/// and neither is anything whose first post-sign character is not `'0'`.
/// A literal that does start with `'0'` is read as fixed-width, and its
/// printed width (sign excluded) is the padding. This rule cannot tell a
/// deliberately padded `042` from a number that merely starts with zero;
/// sequence grouping depends on that reading, so it stays.
pub fn padding(literal: &str) -> usize {
    if literal.len() == 1 {
        return 0;
    }
    let sign = has_sign(literal) as usize;
    if literal.as_bytes()[sign] == b'0' {
        literal.len() - sign
    } else {
        0
    }
}

/// The numbers inside one filename, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameNumbers {
    tokens: Vec<NumberToken>,
}

impl FrameNumbers {
    /// Create an empty vector with room for the common case.
    pub fn new() -> Self {
        // Reserve up front; the realloc costs more than the memory.
        Self {
            tokens: Vec::with_capacity(RESERVED_RUNS),
        }
    }

    /// Scan `filename` and collect every numeric run into a fresh vector.
    pub fn from_filename(filename: &str) -> Self {
        let mut numbers = Self::new();
        for run in scan_numbers(filename) {
            numbers.push(run);
        }
        numbers
    }

    /// Append one numeric run.
    ///
    /// The literal is stored verbatim; a value that cannot be represented
    /// (overflow, malformed run) degrades to time `0` so padding and digit
    /// count analysis still see the original spelling.
    pub fn push(&mut self, literal: &str) {
        debug_assert!(!literal.is_empty(), "numeric runs are never empty");
        self.tokens.push(NumberToken {
            time: time_or_zero(literal),
            literal: literal.to_string(),
        });
    }

    /// Reset to empty, keeping the allocation for the next filename.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Number of numeric runs collected so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate the tokens in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = &NumberToken> {
        self.tokens.iter()
    }

    /// The verbatim literal at position `i`. Panics when out of bounds.
    pub fn literal_at(&self, i: usize) -> &str {
        &self.tokens[i].literal
    }

    /// The parsed value at position `i`. Panics when out of bounds.
    pub fn time_at(&self, i: usize) -> Time {
        self.tokens[i].time
    }

    /// [`digit_count`] of the literal at position `i`.
    pub fn digit_count_at(&self, i: usize) -> usize {
        digit_count(self.literal_at(i))
    }

    /// [`padding`] of the literal at position `i`.
    pub fn padding_at(&self, i: usize) -> usize {
        padding(self.literal_at(i))
    }

    /// Printf-style tag describing the formatting convention at position
    /// `i`: `%04d` for a 4-wide zero-padded token, `%d` when unpadded.
    pub fn padding_tag_at(&self, i: usize) -> String {
        match self.padding_at(i) {
            0 => "%d".to_string(),
            pad => format!("%0{pad}d"),
        }
    }

    /// Aligned three-way comparison for sorting sequence candidates.
    ///
    /// Both vectors must have the same token count: differing counts mean
    /// the filenames belong to different candidate sequences and must have
    /// been separated upstream, so a mismatch here is a caller bug and
    /// panics rather than being guessed around.
    ///
    /// Per position, padding compares first and the parsed value second;
    /// the first decisive position wins. Padding-major ordering keeps
    /// differently-padded conventions apart instead of silently merging
    /// them: `10` (padding 0) never interleaves with `0001`/`0002`
    /// (padding 4). Two vectors may compare `Equal` while their literals
    /// differ (`+07` vs `07`), which is why this is not an `Ord` impl.
    pub fn cmp_aligned(&self, other: &Self) -> Ordering {
        assert_eq!(
            self.tokens.len(),
            other.tokens.len(),
            "aligned comparison requires equal token counts"
        );
        for (mine, theirs) in self.tokens.iter().zip(&other.tokens) {
            let ord = padding(&mine.literal)
                .cmp(&padding(&theirs.literal))
                .then(mine.time.cmp(&theirs.time));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Whether the parsed values match over the half-open range `[begin, end)`.
    ///
    /// Padding and literals are ignored: this is the membership test "all
    /// positions except the varying frame index agree", and `007` vs `7`
    /// must agree there. Both vectors must have at least `end` tokens.
    pub fn range_equals(&self, other: &Self, begin: usize, end: usize) -> bool {
        assert!(
            end <= self.tokens.len() && end <= other.tokens.len(),
            "range end {} past token counts {}/{}",
            end,
            self.tokens.len(),
            other.tokens.len()
        );
        self.tokens[begin..end]
            .iter()
            .zip(&other.tokens[begin..end])
            .all(|(mine, theirs)| mine.time == theirs.time)
    }
}

impl fmt::Display for FrameNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(&token.literal)?;
        }
        Ok(())
    }
}
