#![forbid(unsafe_code)]

//! JSONL report for machine-readable output
//!
//! Outputs one JSON object per line in a fixed order:
//! 1. One settings record
//! 2. One argument record per residual argument, in vector order

use crate::cli::{DemoOptions, OutputFormat};
use serde::Serialize;

/// JSONL report formatter
pub struct JsonlFormatter;

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the report as JSONL
    pub fn format(&self, options: &DemoOptions) -> String {
        let mut output = String::new();

        let settings = SettingsRecord {
            record_type: "settings".to_string(),
            output: options.output.clone(),
            period: options.period,
            debug: options.debug,
            verbosity: options.verbosity,
            format: options.format,
        };
        if let Ok(json) = serde_json::to_string(&settings) {
            output.push_str(&json);
            output.push('\n');
        }

        for (index, arg) in options.args.iter().enumerate() {
            let record = ArgumentRecord {
                record_type: "argument".to_string(),
                index,
                value: arg.clone(),
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }
}

#[derive(Debug, Serialize)]
struct SettingsRecord {
    #[serde(rename = "type")]
    record_type: String,
    output: Option<String>,
    period: f64,
    debug: bool,
    verbosity: u32,
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ArgumentRecord {
    #[serde(rename = "type")]
    record_type: String,
    index: usize,
    value: String,
}
