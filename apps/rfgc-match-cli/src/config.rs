use crate::error::{CliError, CliResult};
use rfgc_match_report::ReportConfig;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Fee schedule built from defaults, then the config file, then flags
pub fn resolve_report_config(
    config_file: Option<&Path>,
    match_fee: Option<&str>,
    classifier_fee: Option<bool>,
) -> CliResult<ReportConfig> {
    let mut config = match config_file {
        Some(path) => load_config_file(path)?,
        None => ReportConfig::default(),
    };

    if let Some(fee) = match_fee {
        config.match_fee = parse_fee(fee)?;
    }
    if let Some(apply) = classifier_fee {
        config.apply_classifier_fee = apply;
    }

    debug!(?config, "Resolved fee schedule");
    Ok(config)
}

fn load_config_file(path: &Path) -> CliResult<ReportConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CliError::InvalidConfig(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_config(&contents)
}

fn parse_config(contents: &str) -> CliResult<ReportConfig> {
    // An empty file means "all defaults".
    if contents.trim().is_empty() {
        return Ok(ReportConfig::default());
    }
    Ok(serde_yaml::from_str(contents)?)
}

fn parse_fee(value: &str) -> CliResult<Decimal> {
    let fee = Decimal::from_str(value.trim()).map_err(|e| {
        CliError::InvalidConfig(format!("Invalid match fee '{}': {}", value, e))
    })?;
    if fee < Decimal::ZERO {
        return Err(CliError::InvalidConfig(format!(
            "Invalid match fee '{}': must not be negative",
            value
        )));
    }
    Ok(fee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_overrides() {
        let config = resolve_report_config(None, None, None).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = parse_config("session_fee: 2\nclassifier_fee: \"3.50\"\n").unwrap();
        assert_eq!(config.session_fee, dec!(2));
        assert_eq!(config.classifier_fee, dec!(3.50));
        assert_eq!(config.match_fee, dec!(30));
        assert!(config.apply_classifier_fee);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(parse_config("  \n").unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_unknown_yaml_key_is_rejected() {
        let result = parse_config("match_fees: 40\n");
        assert!(matches!(result, Err(CliError::Yaml(_))));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "match_fee: 40").unwrap();
        writeln!(file, "apply_classifier_fee: true").unwrap();
        file.flush().unwrap();

        let from_file = resolve_report_config(Some(file.path()), None, None).unwrap();
        assert_eq!(from_file.match_fee, dec!(40));

        let overridden =
            resolve_report_config(Some(file.path()), Some("25.5"), Some(false)).unwrap();
        assert_eq!(overridden.match_fee, dec!(25.5));
        assert!(!overridden.apply_classifier_fee);
    }

    #[test]
    fn test_invalid_match_fee() {
        let result = resolve_report_config(None, Some("thirty"), None);
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));

        let result = resolve_report_config(None, Some("-5"), None);
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = resolve_report_config(Some(Path::new("/nonexistent/fees.yaml")), None, None);
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }
}
