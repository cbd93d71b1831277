//! JSON output format for classification results
//!
//! --format json implementation

use crate::classifier::ClassifierConfig;
use crate::processor::{RoutedDocument, RoutingMode};
use serde::Serialize;

/// Classification result for one document
#[derive(Debug, Clone, Serialize)]
pub struct JsonDocumentResult {
    /// Document name (file path or "-" for stdin)
    pub document: String,
    /// Relationship name (e.g., "CONFORMING", "SUSPECT")
    pub relationship: String,
    /// Classification label
    pub classification: String,
    /// Leading-digit observations
    pub sample_size: u64,
    /// Counts for leading digits 1 through 9
    pub histogram: [u64; 9],
    /// Chi-squared statistic (absent when the test did not run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<f64>,
    /// Chi-squared p-value (absent when the test did not run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_value: Option<f64>,
}

impl From<&RoutedDocument> for JsonDocumentResult {
    fn from(routed: &RoutedDocument) -> Self {
        let assessment = &routed.assessment;
        Self {
            document: routed.document.name.clone(),
            relationship: routed.relationship.name().to_string(),
            classification: assessment.classification.as_str().to_string(),
            sample_size: assessment.sample_size,
            histogram: *assessment.histogram.counts(),
            statistic: assessment.test.map(|t| t.statistic),
            p_value: assessment.test.map(|t| t.pvalue),
        }
    }
}

/// Per-relationship document counts
#[derive(Debug, Clone, Serialize)]
pub struct JsonRelationshipCount {
    pub relationship: String,
    pub documents: u64,
}

/// Complete JSON report
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Format version
    pub version: String,
    /// Configuration the documents were classified with
    pub config: ClassifierConfig,
    /// Routing mode
    pub mode: RoutingMode,
    /// Expected Benford percentages for digits 1 through 9
    pub expected_percentages: [f64; 9],
    /// Per-document results
    pub documents: Vec<JsonDocumentResult>,
    /// Document counts per relationship
    pub summary: Vec<JsonRelationshipCount>,
}

impl JsonReport {
    /// Create a new JSON report
    pub fn new(config: ClassifierConfig, mode: RoutingMode, expected_percentages: [f64; 9]) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
            mode,
            expected_percentages,
            documents: Vec::new(),
            summary: Vec::new(),
        }
    }

    /// Add a routed document to the report
    pub fn add_document(&mut self, routed: &RoutedDocument) {
        let relationship = routed.relationship.name();
        match self
            .summary
            .iter_mut()
            .find(|entry| entry.relationship == relationship)
        {
            Some(entry) => entry.documents += 1,
            None => self.summary.push(JsonRelationshipCount {
                relationship: relationship.to_string(),
                documents: 1,
            }),
        }
        self.documents.push(JsonDocumentResult::from(routed));
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
