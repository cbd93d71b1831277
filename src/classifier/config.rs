// Configuration for Benford conformance classification
//
// One configuration type covers both deployments: the gated three-way
// classifier (minimum sample size present) and the ungated suspect /
// not-suspect filter (minimum sample size absent).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building or validating a classifier configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("alpha must be in the open interval (0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("min_sample must be non-negative, got {0}")]
    NegativeMinSample(i64),
}

/// Configuration for Benford conformance classification
///
/// # Example
/// ```
/// use benford::classifier::ClassifierConfig;
///
/// let config = ClassifierConfig::default();
/// assert_eq!(config.alpha, 0.05); // 95% confidence
/// assert_eq!(config.min_sample, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Significance level at which documents are classified as non-conforming
    ///
    /// The null hypothesis is "leading digits follow Benford's Law"; it is
    /// rejected when the chi-squared p-value falls below `alpha`.
    ///
    /// - 0.05 (default): 95% confidence level
    /// - 0.01: stricter, fewer documents flagged
    /// - 0.10: looser, more documents flagged
    pub alpha: f64,

    /// Minimum number of leading-digit observations required to run the test
    ///
    /// Documents below the minimum are classified as insufficient sample
    /// without running the chi-squared test. `None` disables the gate and the
    /// test always runs.
    ///
    /// Default: 5
    pub min_sample: Option<u64>,

    /// Treat a document with zero digit observations as insufficient sample
    /// even when no gate is configured
    ///
    /// A goodness-of-fit test over zero observations has no defined
    /// statistic. Setting this to `false` reproduces the legacy ungated
    /// filter, which reported such documents as conforming.
    ///
    /// Default: true
    pub strict_minimum: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            min_sample: Some(5),
            strict_minimum: true,
        }
    }
}

impl ClassifierConfig {
    /// Build a configuration from untyped host values
    ///
    /// Hosts that receive properties as plain numbers use this constructor so
    /// out-of-range values are rejected instead of clamped.
    pub fn new(alpha: f64, min_sample: Option<i64>) -> Result<Self, ConfigError> {
        let min_sample = min_sample.map(Self::checked_min_sample).transpose()?;

        let config = Self {
            alpha,
            min_sample,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Convert an untyped minimum sample size, rejecting negative values
    pub fn checked_min_sample(value: i64) -> Result<u64, ConfigError> {
        u64::try_from(value).map_err(|_| ConfigError::NegativeMinSample(value))
    }

    /// Create an ungated configuration (suspect / not-suspect filtering)
    ///
    /// The chi-squared test runs for any non-empty document regardless of
    /// how few digits it contains.
    pub fn ungated() -> Self {
        Self {
            min_sample: None,
            ..Self::default()
        }
    }

    /// Create an ungated configuration that also keeps the legacy treatment
    /// of empty documents (reported as conforming)
    pub fn legacy() -> Self {
        Self {
            min_sample: None,
            strict_minimum: false,
            ..Self::default()
        }
    }

    /// Builder-style override of the significance level
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Builder-style override of the minimum sample size
    pub fn with_min_sample(mut self, min_sample: Option<u64>) -> Self {
        self.min_sample = min_sample;
        self
    }

    /// Load a configuration from a TOML file and validate it
    ///
    /// # Example TOML
    /// ```toml
    /// alpha = 0.01
    /// min_sample = 20
    /// strict_minimum = true
    /// ```
    ///
    /// Omitted keys take their default values; omitting `min_sample` keeps
    /// the default gate of 5. `min_sample = 0` behaves like an ungated
    /// configuration.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).with_context(|| "Failed to parse TOML classifier config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails both comparisons and lands here too
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }

        Ok(())
    }

    /// True when a minimum sample gate is configured
    pub fn is_gated(&self) -> bool {
        self.min_sample.is_some()
    }
}
