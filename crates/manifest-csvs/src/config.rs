use crate::schemas::{DEFAULT_OUTPUT_FILENAME, REQUIRED_COLUMNS};
use serde::Deserialize;
use std::path::PathBuf;

/// Options controlling a validation run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorOptions {
    /// Columns that must appear in the header, checked in this order
    pub required_columns: Vec<String>,

    /// Where the normalized manifest is written
    pub output: PathBuf,

    /// Whether a header may name the same column twice
    pub allow_duplicate_columns: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            required_columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            allow_duplicate_columns: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ValidatorOptions::default();
        assert_eq!(options.required_columns, vec!["sample", "R1", "R2"]);
        assert_eq!(options.output, PathBuf::from("manifest.csv"));
        assert!(!options.allow_duplicate_columns);
    }
}
