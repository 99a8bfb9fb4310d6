use crate::error::{CliError, CliResult};
use manifest_csvs::ValidatorOptions;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load validator options from an optional YAML file.
///
/// ```yaml
/// required_columns: [sample, R1, R2]
/// output: manifest.csv
/// allow_duplicate_columns: false
/// ```
///
/// Fields left out keep their defaults.
pub fn load_options(config: Option<&Path>) -> CliResult<ValidatorOptions> {
    let Some(path) = config else {
        return Ok(ValidatorOptions::default());
    };

    let contents = fs::read_to_string(path)?;
    let options = parse_options(&contents).map_err(|source| CliError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    check_options(&options)?;

    debug!(config = %path.display(), ?options, "loaded validator options");
    Ok(options)
}

fn parse_options(contents: &str) -> Result<ValidatorOptions, serde_yaml::Error> {
    // An empty document means "all defaults".
    if contents.trim().is_empty() {
        return Ok(ValidatorOptions::default());
    }
    serde_yaml::from_str(contents)
}

fn check_options(options: &ValidatorOptions) -> CliResult<()> {
    if options.required_columns.is_empty() {
        return Err(CliError::InvalidConfig(
            "required_columns must name at least one column".to_string(),
        ));
    }
    if options.output.as_os_str().is_empty() {
        return Err(CliError::InvalidConfig("output must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let options = parse_options("output: normalized/manifest.csv\n").unwrap();
        assert_eq!(options.output, PathBuf::from("normalized/manifest.csv"));
        assert_eq!(options.required_columns, vec!["sample", "R1", "R2"]);
        assert!(!options.allow_duplicate_columns);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_options("").unwrap(), ValidatorOptions::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse_options("delimiter: \"\\t\"\n").is_err());
    }

    #[test]
    fn test_empty_required_columns_rejected() {
        let options = parse_options("required_columns: []\n").unwrap();
        let err = check_options(&options).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }
}
