#![forbid(unsafe_code)]

//! Defaults file for the demo program
//!
//! A small TOML document whose keys mirror the long options:
//!
//! ```toml
//! output = "results.txt"
//! period = 2.5
//! debug = true
//! verbose = 2
//! format = "jsonl"
//! ```
//!
//! Every key is optional. Options given on the command line take
//! precedence over the file.

use crate::cli::demo::{DemoError, OutputFormat};
use serde::Deserialize;
use std::path::Path;

/// Parsed contents of a defaults file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    pub output: Option<String>,
    pub period: Option<f64>,
    pub debug: Option<bool>,
    pub verbose: Option<u32>,
    pub format: Option<OutputFormat>,
}

impl DemoConfig {
    /// Load and validate a defaults file
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let content = std::fs::read_to_string(path).map_err(|source| DemoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| DemoError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(period) = config.period
            && (period < 0.0 || period.is_nan())
        {
            return Err(DemoError::ConfigInvalid {
                path: path.to_path_buf(),
                message: format!("period must not be negative, got {}", period),
            });
        }
        Ok(config)
    }

    /// Parse TOML text without validation
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty() {
        assert_eq!(DemoConfig::parse("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let config = DemoConfig::parse(
            r#"
output = "out.txt"
period = 2.5
debug = true
verbose = 2
format = "jsonl"
"#,
        )
        .unwrap();

        assert_eq!(config.output.as_deref(), Some("out.txt"));
        assert_eq!(config.period, Some(2.5));
        assert_eq!(config.debug, Some(true));
        assert_eq!(config.verbose, Some(2));
        assert_eq!(config.format, Some(OutputFormat::Jsonl));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        assert!(DemoConfig::parse("colour = \"red\"").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = DemoConfig::load(&path).unwrap_err();
        assert!(matches!(err, DemoError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_negative_period() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demo.toml");
        fs::write(&path, "period = -1.0\n").unwrap();

        let err = DemoConfig::load(&path).unwrap_err();
        assert!(matches!(err, DemoError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demo.toml");
        fs::write(&path, "invalid [[ toml").unwrap();

        let err = DemoConfig::load(&path).unwrap_err();
        assert!(matches!(err, DemoError::ConfigParse { .. }));
    }
}
