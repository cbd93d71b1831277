//! Document routing for pipeline hosts
//!
//! The host delivers each document as raw bytes and receives the same bytes
//! back, unchanged, tagged with the relationship it should be routed to.
//! Two routing modes cover the two processor deployments: conformance
//! (three relationships, usually gated) and suspicion (suspect / not suspect,
//! usually ungated).

use crate::classifier::{
    BenfordClassifier, Classification, ClassificationAssessment, ClassifierConfig, ConfigError,
};
use crate::digits::extract_from_bytes;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship naming scheme used when routing documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingMode {
    /// CONFORMING / NON_CONFORMING / INSUFFICIENT_SAMPLE
    #[default]
    Conformance,
    /// NOT_SUSPECT / SUSPECT (INSUFFICIENT_SAMPLE for empty documents)
    Suspicion,
}

/// Destination a routed document is transferred to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Relationship {
    #[serde(rename = "CONFORMING")]
    Conforming,
    #[serde(rename = "NON_CONFORMING")]
    NonConforming,
    #[serde(rename = "INSUFFICIENT_SAMPLE")]
    InsufficientSample,
    #[serde(rename = "NOT_SUSPECT")]
    NotSuspect,
    #[serde(rename = "SUSPECT")]
    Suspect,
}

impl Relationship {
    /// Map a classification to its relationship under `mode`
    pub fn for_classification(mode: RoutingMode, classification: Classification) -> Self {
        match (mode, classification) {
            (_, Classification::InsufficientSample) => Relationship::InsufficientSample,
            (RoutingMode::Conformance, Classification::ConformingSufficientSample) => {
                Relationship::Conforming
            }
            (RoutingMode::Conformance, Classification::NonConformingSufficientSample) => {
                Relationship::NonConforming
            }
            (RoutingMode::Suspicion, Classification::ConformingSufficientSample) => {
                Relationship::NotSuspect
            }
            (RoutingMode::Suspicion, Classification::NonConformingSufficientSample) => {
                Relationship::Suspect
            }
        }
    }

    /// Relationship name as exposed to the host
    pub fn name(&self) -> &'static str {
        match self {
            Relationship::Conforming => "CONFORMING",
            Relationship::NonConforming => "NON_CONFORMING",
            Relationship::InsufficientSample => "INSUFFICIENT_SAMPLE",
            Relationship::NotSuspect => "NOT_SUSPECT",
            Relationship::Suspect => "SUSPECT",
        }
    }

    /// Short description shown to pipeline operators
    pub fn description(&self) -> &'static str {
        match self {
            Relationship::Conforming => "Conforming relationship",
            Relationship::NonConforming => "Non-conforming relationship",
            Relationship::InsufficientSample => {
                "Insufficient numerical values to run a Chi-squared test"
            }
            Relationship::NotSuspect => "Not suspect relationship",
            Relationship::Suspect => "Suspect relationship",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configurable property exposed to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub default_value: &'static str,
}

/// Significance level property
pub const ALPHA_PROPERTY: PropertyDescriptor = PropertyDescriptor {
    name: "alpha",
    description: "Significance level at which documents will be classified as conforming or non-conforming.",
    default_value: "0.05",
};

/// Minimum sample property
pub const MIN_SAMPLE_PROPERTY: PropertyDescriptor = PropertyDescriptor {
    name: "min-sample",
    description: "Minimum number of numerical values to perform a Chi-squared test.",
    default_value: "5",
};

/// A document delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Host-assigned name (file name, flow file id, ...)
    pub name: String,
    /// Raw document bytes
    pub content: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A document tagged with its routing decision
#[derive(Debug, Clone)]
pub struct RoutedDocument {
    /// The original document, unmodified
    pub document: Document,
    /// Relationship the document is routed to
    pub relationship: Relationship,
    /// Classification details
    pub assessment: ClassificationAssessment,
}

/// Benford's Law routing processor
///
/// Configuration is validated once at construction, before any document is
/// processed.
///
/// # Example
/// ```
/// use benford::classifier::ClassifierConfig;
/// use benford::processor::{BenfordProcessor, Document, Relationship, RoutingMode};
///
/// let processor =
///     BenfordProcessor::new(ClassifierConfig::default(), RoutingMode::Conformance).unwrap();
/// let routed = processor.process(Document::new("memo.txt", "see page 3")).unwrap();
/// assert_eq!(routed.relationship, Relationship::InsufficientSample);
/// assert_eq!(routed.document.content, b"see page 3");
/// ```
#[derive(Debug, Clone)]
pub struct BenfordProcessor {
    classifier: BenfordClassifier,
    config: ClassifierConfig,
    mode: RoutingMode,
}

impl BenfordProcessor {
    /// Create a processor, rejecting invalid configuration up front
    pub fn new(config: ClassifierConfig, mode: RoutingMode) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::info!(
            "Benford processor: alpha={}, min_sample={:?}, strict_minimum={}, mode={:?}",
            config.alpha,
            config.min_sample,
            config.strict_minimum,
            mode
        );
        Ok(Self {
            classifier: BenfordClassifier::new(),
            config,
            mode,
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn mode(&self) -> RoutingMode {
        self.mode
    }

    pub fn classifier(&self) -> &BenfordClassifier {
        &self.classifier
    }

    /// Relationships this processor can route to
    pub fn relationships(&self) -> Vec<Relationship> {
        let mut relationships = match self.mode {
            RoutingMode::Conformance => vec![Relationship::Conforming, Relationship::NonConforming],
            RoutingMode::Suspicion => vec![Relationship::NotSuspect, Relationship::Suspect],
        };
        if self.config.is_gated() || self.config.strict_minimum {
            relationships.push(Relationship::InsufficientSample);
        }
        relationships
    }

    /// Properties this processor exposes to the host
    pub fn properties(&self) -> Vec<PropertyDescriptor> {
        match self.mode {
            RoutingMode::Conformance => vec![ALPHA_PROPERTY, MIN_SAMPLE_PROPERTY],
            RoutingMode::Suspicion => vec![ALPHA_PROPERTY],
        }
    }

    /// Classify a document and tag it with its relationship
    pub fn process(&self, document: Document) -> Result<RoutedDocument> {
        let histogram = extract_from_bytes(&document.content);
        let assessment = self.classifier.assess(&histogram, &self.config)?;
        let relationship = Relationship::for_classification(self.mode, assessment.classification);

        tracing::debug!(
            "{}: {} digits -> {}",
            document.name,
            assessment.sample_size,
            relationship
        );

        Ok(RoutedDocument {
            document,
            relationship,
            assessment,
        })
    }
}
