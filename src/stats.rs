//! Routing statistics for -c mode
//!
//! Tallies how many documents went to each relationship and how many digit
//! observations they contributed.

use crate::processor::{Relationship, RoutedDocument};
use std::collections::BTreeMap;

/// Statistics for a single relationship
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipStats {
    /// Number of documents routed to this relationship
    pub documents: u64,
    /// Leading-digit observations across those documents
    pub digits: u64,
    /// Total document size in bytes
    pub bytes: u64,
}

/// Summary totals for all relationships
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTotals {
    pub total_documents: u64,
    pub total_digits: u64,
    pub total_bytes: u64,
}

/// Tracks routing statistics across a batch of documents
#[derive(Debug, Default)]
pub struct RoutingStats {
    stats: BTreeMap<Relationship, RelationshipStats>,
}

impl RoutingStats {
    /// Create a new statistics tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a routed document
    pub fn record(&mut self, routed: &RoutedDocument) {
        let entry = self.stats.entry(routed.relationship).or_default();
        entry.documents += 1;
        entry.digits += routed.assessment.sample_size;
        entry.bytes += routed.document.content.len() as u64;
    }

    /// Statistics for one relationship, if any document was routed there
    pub fn get(&self, relationship: Relationship) -> Option<&RelationshipStats> {
        self.stats.get(&relationship)
    }

    pub fn calculate_totals(&self) -> RoutingTotals {
        self.stats.values().fold(
            RoutingTotals {
                total_documents: 0,
                total_digits: 0,
                total_bytes: 0,
            },
            |totals, s| RoutingTotals {
                total_documents: totals.total_documents + s.documents,
                total_digits: totals.total_digits + s.digits,
                total_bytes: totals.total_bytes + s.bytes,
            },
        )
    }

    /// Format the summary table (matching strace -c layout)
    pub fn to_summary_string(&self) -> String {
        let mut out = String::new();
        let totals = self.calculate_totals();

        out.push_str("% docs     documents      digits       bytes relationship\n");
        out.push_str("------ ----------- ----------- ----------- --------------------\n");

        let mut sorted: Vec<_> = self.stats.iter().collect();
        sorted.sort_by(|a, b| b.1.documents.cmp(&a.1.documents).then(a.0.cmp(b.0)));

        for (relationship, stats) in sorted {
            let percent = if totals.total_documents > 0 {
                100.0 * stats.documents as f64 / totals.total_documents as f64
            } else {
                0.0
            };
            out.push_str(&format!(
                "{:>6.2} {:>11} {:>11} {:>11} {}\n",
                percent, stats.documents, stats.digits, stats.bytes, relationship
            ));
        }

        out.push_str("------ ----------- ----------- ----------- --------------------\n");
        out.push_str(&format!(
            "100.00 {:>11} {:>11} {:>11} total\n",
            totals.total_documents, totals.total_digits, totals.total_bytes
        ));
        out
    }

    /// Print statistics summary to stderr
    pub fn print_summary(&self) {
        if self.stats.is_empty() {
            eprintln!("No documents classified.");
            return;
        }
        eprint!("{}", self.to_summary_string());
    }
}
