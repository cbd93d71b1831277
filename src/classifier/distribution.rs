// Theoretical leading-digit distribution under Benford's Law
//
// P(d) = log10(1 + 1/d) for d in 1..=9. Stored as percentages so the table
// reads the way the law is usually quoted (30.1% for digit 1, 4.6% for 9).

use crate::digits::DIGIT_BUCKETS;
use serde::Serialize;

/// Expected share of leading digit `digit` in percent
pub fn benford_percentage(digit: u8) -> f64 {
    100.0 * (1.0 + 1.0 / digit as f64).log10()
}

/// Expected leading-digit percentages, index 0 = digit 1
///
/// Built once and never mutated; cheap to copy and safe to share between
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TheoreticalDistribution {
    percentages: [f64; DIGIT_BUCKETS],
}

impl Default for TheoreticalDistribution {
    fn default() -> Self {
        Self::new()
    }
}

impl TheoreticalDistribution {
    /// Compute the Benford percentages for digits 1 through 9
    pub fn new() -> Self {
        Self {
            percentages: std::array::from_fn(|i| benford_percentage(i as u8 + 1)),
        }
    }

    /// Percentages for digits 1 through 9
    pub fn percentages(&self) -> &[f64; DIGIT_BUCKETS] {
        &self.percentages
    }

    /// Expected counts for a sample of `sample_size` observations
    pub fn expected_counts(&self, sample_size: u64) -> [f64; DIGIT_BUCKETS] {
        self.percentages
            .map(|percentage| percentage / 100.0 * sample_size as f64)
    }
}
