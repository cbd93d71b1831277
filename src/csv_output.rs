//! CSV output format for classification results
//!
//! One row per document for spreadsheet analysis and machine parsing

use crate::processor::RoutedDocument;

/// CSV record for a single document
#[derive(Debug, Clone)]
pub struct CsvDocument {
    pub name: String,
    pub relationship: String,
    pub classification: String,
    pub sample_size: u64,
    pub histogram: [u64; 9],
    pub statistic: Option<f64>,
    pub p_value: Option<f64>,
}

impl From<&RoutedDocument> for CsvDocument {
    fn from(routed: &RoutedDocument) -> Self {
        let assessment = &routed.assessment;
        Self {
            name: routed.document.name.clone(),
            relationship: routed.relationship.name().to_string(),
            classification: assessment.classification.as_str().to_string(),
            sample_size: assessment.sample_size,
            histogram: *assessment.histogram.counts(),
            statistic: assessment.test.map(|t| t.statistic),
            p_value: assessment.test.map(|t| t.pvalue),
        }
    }
}

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    documents: Vec<CsvDocument>,
}

impl CsvOutput {
    /// Create a new CSV output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document to the output
    pub fn add_document(&mut self, document: CsvDocument) {
        self.documents.push(document);
    }

    fn header() -> String {
        let mut headers = vec![
            "document".to_string(),
            "relationship".to_string(),
            "classification".to_string(),
            "sample_size".to_string(),
        ];
        headers.extend((1..=9).map(|d| format!("d{}", d)));
        headers.push("statistic".to_string());
        headers.push("p_value".to_string());
        headers.join(",")
    }

    /// Escape CSV field (handle commas, quotes, line breaks)
    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_document(document: &CsvDocument) -> String {
        let mut fields = vec![
            Self::escape_field(&document.name),
            document.relationship.clone(),
            document.classification.clone(),
            document.sample_size.to_string(),
        ];
        fields.extend(document.histogram.iter().map(|c| c.to_string()));
        fields.push(
            document
                .statistic
                .map(|s| format!("{:.6}", s))
                .unwrap_or_default(),
        );
        fields.push(
            document
                .p_value
                .map(|p| format!("{:.6}", p))
                .unwrap_or_default(),
        );
        fields.join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(&Self::header());
        output.push('\n');

        for document in &self.documents {
            output.push_str(&Self::format_document(document));
            output.push('\n');
        }

        output
    }
}
