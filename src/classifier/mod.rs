// Benford's Law conformance classification
//
// Compares a document's leading-digit histogram with the theoretical Benford
// distribution using Pearson's chi-squared goodness-of-fit test, then routes
// the result through a configurable significance level and minimum sample
// size.
//
// Background:
// Benford, F. (1938). The law of anomalous numbers. Proceedings of the
//     American Philosophical Society, 78(4). Leading digit d occurs with
//     probability log10(1 + 1/d) in many naturally occurring datasets.
// Nigrini, M. (1996). A taxpayer compliance application of Benford's Law.
//     Journal of the American Taxation Association, 18(1). Deviations from
//     the expected distribution flag fabricated figures for review.
//
// Implementation:
// - Chi-squared distribution (p-values) from statrs
// - Expected frequencies rescaled to the observed sample size
// - Degrees of freedom = 8 (nine digit buckets)

mod config;
mod distribution;
mod statistics;
mod verdict;

pub use config::{ClassifierConfig, ConfigError};
pub use distribution::{benford_percentage, TheoreticalDistribution};
pub use statistics::{chi_squared_p_value, chi_squared_test, ChiSquaredTest};
pub use verdict::{BenfordClassifier, Classification, ClassificationAssessment};
