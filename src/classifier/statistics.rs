// Chi-squared goodness-of-fit test
//
// Pearson's statistic X² = Σ (o − e)² / e with k − 1 degrees of freedom.
// The p-value is the upper tail of the chi-squared distribution, taken from
// statrs rather than a hand-rolled incomplete gamma function.

use anyhow::{Context, Result};
use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Result of a chi-squared goodness-of-fit test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChiSquaredTest {
    /// Pearson chi-squared statistic
    pub statistic: f64,

    /// Upper-tail p-value - probability of a deviation at least this large
    /// if the observations follow the expected distribution
    /// - p < alpha: reject the expected distribution
    /// - p >= alpha: consistent with the expected distribution
    pub pvalue: f64,

    /// Degrees of freedom (buckets - 1)
    pub df: f64,
}

impl ChiSquaredTest {
    /// True when the expected distribution is rejected at level `alpha`
    pub fn rejects(&self, alpha: f64) -> bool {
        self.pvalue < alpha
    }
}

/// Run a chi-squared goodness-of-fit test
///
/// `expected` may be given in any unit (counts, proportions or percentages):
/// it is rescaled so that its total equals the observed total before the
/// statistic is computed.
///
/// # Errors
/// Fails on fewer than two buckets, mismatched lengths, non-positive or
/// non-finite expected values, or an observed total of zero.
///
/// # Example
/// ```
/// use benford::classifier::chi_squared_test;
///
/// let test = chi_squared_test(&[10, 20], &[50.0, 50.0]).unwrap();
/// assert!((test.statistic - 10.0 / 3.0).abs() < 1e-9);
/// assert_eq!(test.df, 1.0);
/// ```
pub fn chi_squared_test(observed: &[u64], expected: &[f64]) -> Result<ChiSquaredTest> {
    if observed.len() < 2 {
        anyhow::bail!("Need at least 2 buckets for a chi-squared test");
    }

    if observed.len() != expected.len() {
        anyhow::bail!(
            "Observed and expected bucket counts differ: {} vs {}",
            observed.len(),
            expected.len()
        );
    }

    if let Some(bad) = expected.iter().find(|e| !(e.is_finite() && **e > 0.0)) {
        anyhow::bail!("Expected frequencies must be positive and finite, got {}", bad);
    }

    let observed_total: u64 = observed.iter().sum();
    if observed_total == 0 {
        anyhow::bail!("Cannot run a chi-squared test on zero observations");
    }

    let expected_total: f64 = expected.iter().sum();
    let scale = observed_total as f64 / expected_total;

    let statistic = observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| {
            let e = e * scale;
            let diff = o as f64 - e;
            diff * diff / e
        })
        .sum::<f64>();

    let df = (observed.len() - 1) as f64;
    let pvalue = chi_squared_p_value(statistic, df)?;

    Ok(ChiSquaredTest {
        statistic,
        pvalue,
        df,
    })
}

/// Upper-tail probability of the chi-squared distribution
pub fn chi_squared_p_value(statistic: f64, df: f64) -> Result<f64> {
    if !statistic.is_finite() || statistic < 0.0 {
        anyhow::bail!("Chi-squared statistic must be finite and non-negative, got {}", statistic);
    }

    let distribution = ChiSquared::new(df)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("Invalid chi-squared degrees of freedom: {}", df))?;

    let pvalue = distribution.sf(statistic);
    if !pvalue.is_finite() {
        anyhow::bail!("Chi-squared p-value is not finite for statistic {}", statistic);
    }

    Ok(pvalue.clamp(0.0, 1.0))
}
