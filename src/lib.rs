//! Benford - leading-digit conformance classifier for documents
//!
//! This library extracts the leading-digit histogram of a text document,
//! compares it with Benford's Law using a chi-squared goodness-of-fit test,
//! and routes the document to a conforming, non-conforming or
//! insufficient-sample relationship.

pub mod classifier;
pub mod cli;
pub mod csv_output;
pub mod digits;
pub mod json_output;
pub mod processor;
pub mod stats;
