//! Batch conversion report

use super::runner::BatchOutcome;
use crate::validate::ValidationSummary;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete report of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub input_directory: String,
    pub output_directory: String,
    /// Timestamp of the run
    pub timestamp: String,
    /// Duration in milliseconds
    pub duration_ms: u64,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
    /// Present unless validation was skipped
    pub validation: Option<ValidationSummary>,
}

impl BatchReport {
    pub fn new(input_dir: &Path, output_dir: &Path, outcome: BatchOutcome) -> Self {
        Self {
            input_directory: input_dir.display().to_string(),
            output_directory: output_dir.display().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            duration_ms: 0,
            outcome,
            validation: None,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to human-readable text format
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("Batch Conversion Report\n");
        output.push_str("=======================\n");
        output.push_str(&format!("Input directory:  {}\n", self.input_directory));
        output.push_str(&format!("Output directory: {}\n", self.output_directory));
        output.push_str(&format!("Date:             {}\n", self.timestamp));
        output.push_str(&format!("Duration:         {}ms\n\n", self.duration_ms));

        output.push_str("Summary\n");
        output.push_str("-------\n");
        output.push_str(&format!("Converted:        {}\n", self.outcome.converted.len()));
        output.push_str(&format!("Skipped:          {}\n\n", self.outcome.skipped.len()));

        if !self.outcome.converted.is_empty() {
            output.push_str("Files\n");
            output.push_str("-----\n");
            for entry in &self.outcome.converted {
                output.push_str(&format!("✓ {} -> {}.mdx\n", entry.slug, entry.target));
            }
            output.push('\n');
        }

        if !self.outcome.skipped.is_empty() {
            output.push_str("Warnings\n");
            output.push_str("--------\n");
            for entry in &self.outcome.skipped {
                output.push_str(&format!("⚠ No mapping for: {}\n", entry.slug));
            }
            output.push('\n');
        }

        match &self.validation {
            Some(summary) => output.push_str(&summary.to_text()),
            None => output.push_str("Validation skipped\n"),
        }

        output
    }
}
