// Benford conformance verdict
//
// Combines the minimum-sample gate, the zero-sample policy and the
// chi-squared goodness-of-fit test into a single label per document.

use crate::classifier::config::ClassifierConfig;
use crate::classifier::distribution::TheoreticalDistribution;
use crate::classifier::statistics::{chi_squared_test, ChiSquaredTest};
use crate::digits::{extract_leading_digit_histogram, Histogram};
use anyhow::Result;
use serde::Serialize;
use std::fmt;

/// Classification label for one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    /// Enough digits, and the test did not reject Benford's Law
    ConformingSufficientSample,

    /// Enough digits, and the test rejected Benford's Law (p < alpha)
    NonConformingSufficientSample,

    /// Too few digits to run a meaningful test
    InsufficientSample,
}

impl Classification {
    /// Stable snake_case name used in machine-readable output
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::ConformingSufficientSample => "conforming_sufficient_sample",
            Classification::NonConformingSufficientSample => "non_conforming_sufficient_sample",
            Classification::InsufficientSample => "insufficient_sample",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detailed classification result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationAssessment {
    /// Final label
    pub classification: Classification,

    /// Histogram the label was derived from
    pub histogram: Histogram,

    /// Number of leading-digit observations
    pub sample_size: u64,

    /// Chi-squared test, absent when the document was classified without one
    pub test: Option<ChiSquaredTest>,

    /// Configuration used for the assessment
    pub config: ClassifierConfig,
}

impl ClassificationAssessment {
    /// Generate human-readable report
    pub fn to_report_string(&self, distribution: &TheoreticalDistribution) -> String {
        let mut report = String::new();

        match self.classification {
            Classification::ConformingSufficientSample => {
                report.push_str("✅ CONFORMS TO BENFORD'S LAW\n\n");
            }
            Classification::NonConformingSufficientSample => {
                report.push_str("❌ DOES NOT CONFORM TO BENFORD'S LAW\n\n");
            }
            Classification::InsufficientSample => {
                report.push_str("⚠️  INSUFFICIENT SAMPLE\n\n");
            }
        }

        report.push_str(&format!("Sample size: {}\n", self.sample_size));
        match self.config.min_sample {
            Some(min) => report.push_str(&format!("Minimum sample: {}\n", min)),
            None => report.push_str("Minimum sample: none\n"),
        }
        report.push_str(&format!(
            "Significance level: {} ({}% confidence)\n",
            self.config.alpha,
            (1.0 - self.config.alpha) * 100.0
        ));

        if let Some(test) = &self.test {
            report.push_str(&format!(
                "\n📊 Chi-squared: statistic={:.4}, df={}, p={:.4}\n",
                test.statistic, test.df, test.pvalue
            ));
        }

        if self.sample_size > 0 {
            report.push_str("\nDigit  Observed  Expected\n");
            let observed = self.histogram.percentages();
            for (i, (obs, exp)) in observed
                .iter()
                .zip(distribution.percentages().iter())
                .enumerate()
            {
                report.push_str(&format!(
                    "  {}    {:>6.2}%   {:>6.2}%\n",
                    i + 1,
                    obs,
                    exp
                ));
            }
        }

        report
    }
}

/// Benford's Law document classifier
///
/// Holds the theoretical distribution, computed once at construction.
/// Classification is a pure function of the histogram and configuration, so
/// one instance can be shared by reference across threads.
///
/// # Example
/// ```
/// use benford::classifier::{BenfordClassifier, Classification, ClassifierConfig};
/// use benford::digits::extract_leading_digit_histogram;
///
/// let classifier = BenfordClassifier::new();
/// let histogram = extract_leading_digit_histogram("12 3");
/// let label = classifier.classify(&histogram, &ClassifierConfig::default()).unwrap();
/// assert_eq!(label, Classification::InsufficientSample);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BenfordClassifier {
    distribution: TheoreticalDistribution,
}

impl BenfordClassifier {
    /// Create a classifier with the Benford distribution precomputed
    pub fn new() -> Self {
        Self {
            distribution: TheoreticalDistribution::new(),
        }
    }

    /// Theoretical distribution used by this classifier
    pub fn distribution(&self) -> &TheoreticalDistribution {
        &self.distribution
    }

    /// Classify a histogram
    ///
    /// # Errors
    /// Returns the `ConfigError` for an invalid configuration, or an error if
    /// the test produced a non-finite statistic.
    pub fn classify(
        &self,
        histogram: &Histogram,
        config: &ClassifierConfig,
    ) -> Result<Classification> {
        Ok(self.assess(histogram, config)?.classification)
    }

    /// Classify a text document
    pub fn classify_text(&self, text: &str, config: &ClassifierConfig) -> Result<Classification> {
        self.classify(&extract_leading_digit_histogram(text), config)
    }

    /// Classify a histogram and keep the test details
    pub fn assess(
        &self,
        histogram: &Histogram,
        config: &ClassifierConfig,
    ) -> Result<ClassificationAssessment> {
        config.validate()?;

        let sample_size = histogram.sample_size();
        let assessment = |classification: Classification, test: Option<ChiSquaredTest>| {
            ClassificationAssessment {
                classification,
                histogram: *histogram,
                sample_size,
                test,
                config: config.clone(),
            }
        };

        if let Some(min) = config.min_sample {
            if sample_size < min {
                tracing::debug!(
                    "Sample size {} below minimum {}, skipping chi-squared test",
                    sample_size,
                    min
                );
                return Ok(assessment(Classification::InsufficientSample, None));
            }
        }

        if sample_size == 0 {
            // No defined statistic; legacy mode reported these as conforming
            let classification = if config.strict_minimum {
                Classification::InsufficientSample
            } else {
                Classification::ConformingSufficientSample
            };
            tracing::debug!("Empty histogram classified as {}", classification);
            return Ok(assessment(classification, None));
        }

        let test = chi_squared_test(histogram.counts(), self.distribution.percentages())?;

        let classification = if test.rejects(config.alpha) {
            Classification::NonConformingSufficientSample
        } else {
            Classification::ConformingSufficientSample
        };

        tracing::debug!(
            "n={} statistic={:.4} p={:.4} alpha={} -> {}",
            sample_size,
            test.statistic,
            test.pvalue,
            config.alpha,
            classification
        );

        Ok(assessment(classification, Some(test)))
    }
}
