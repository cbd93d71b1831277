//! Leading-digit extraction for Benford analysis
//!
//! Tokenizes a document on whitespace and counts the first character of every
//! token that starts with a nonzero ASCII digit.
//!
//! Known limitation: only the very first character is inspected, so tokens
//! such as `-123`, `$45` or `0.5` are excluded even though a human reader
//! would see a leading digit in them.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ops::Index;

/// Number of buckets in a leading-digit histogram (digits 1 through 9)
pub const DIGIT_BUCKETS: usize = 9;

/// Counts of observed leading digits
///
/// Index `i` holds the number of tokens whose leading digit is `i + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Histogram {
    counts: [u64; DIGIT_BUCKETS],
}

impl Histogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a histogram from raw bucket counts (index 0 = digit 1)
    pub fn from_counts(counts: [u64; DIGIT_BUCKETS]) -> Self {
        Self { counts }
    }

    /// Record one token's leading character
    ///
    /// Returns `true` if the character was a digit 1-9 and was counted.
    pub fn record(&mut self, first: char) -> bool {
        match first {
            '1'..='9' => {
                let bucket = (first as u8 - b'1') as usize;
                self.counts[bucket] += 1;
                true
            }
            _ => false,
        }
    }

    /// Raw bucket counts
    pub fn counts(&self) -> &[u64; DIGIT_BUCKETS] {
        &self.counts
    }

    /// Count for a leading digit (1-9), `None` for anything else
    pub fn count_for_digit(&self, digit: u8) -> Option<u64> {
        match digit {
            1..=9 => Some(self.counts[(digit - 1) as usize]),
            _ => None,
        }
    }

    /// Total number of digit observations
    pub fn sample_size(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True when no token contributed a leading digit
    pub fn is_empty(&self) -> bool {
        self.sample_size() == 0
    }

    /// Observed share of each digit in percent, or all zeros for an empty histogram
    pub fn percentages(&self) -> [f64; DIGIT_BUCKETS] {
        let total = self.sample_size();
        if total == 0 {
            return [0.0; DIGIT_BUCKETS];
        }
        let mut shares = [0.0; DIGIT_BUCKETS];
        for (share, &count) in shares.iter_mut().zip(self.counts.iter()) {
            *share = 100.0 * count as f64 / total as f64;
        }
        shares
    }
}

impl Index<usize> for Histogram {
    type Output = u64;

    fn index(&self, bucket: usize) -> &Self::Output {
        &self.counts[bucket]
    }
}

/// Build the leading-digit histogram of a text document
///
/// Runs of ASCII whitespace act as a single delimiter, so leading and trailing
/// whitespace never produce empty tokens. Tokens starting with `0`, a sign,
/// a decimal point, a letter or any other symbol are skipped.
///
/// # Example
/// ```
/// use benford::digits::extract_leading_digit_histogram;
///
/// let histogram = extract_leading_digit_histogram("12 7.5 0.3 -4 19 abc");
/// assert_eq!(histogram.counts(), &[2, 0, 0, 0, 0, 0, 1, 0, 0]);
/// assert_eq!(histogram.sample_size(), 3);
/// ```
pub fn extract_leading_digit_histogram(text: &str) -> Histogram {
    let mut histogram = Histogram::new();
    for token in text.split_ascii_whitespace() {
        if let Some(first) = token.chars().next() {
            histogram.record(first);
        }
    }
    histogram
}

/// Build the histogram of an opaque byte stream
///
/// Bytes are decoded as UTF-8; invalid sequences become U+FFFD, which can never
/// be a leading digit.
pub fn extract_from_bytes(content: &[u8]) -> Histogram {
    let text = String::from_utf8_lossy(content);
    if matches!(text, Cow::Owned(_)) {
        tracing::warn!(
            "Document is not valid UTF-8 ({} bytes), decoding lossily",
            content.len()
        );
    }
    extract_leading_digit_histogram(&text)
}
