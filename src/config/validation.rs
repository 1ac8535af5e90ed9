//! Configuration validation
//!
//! Validates an aggregator configuration before any filesystem work:
//! - Suffixes are non-empty and start with a dot
//! - Paths are non-empty
//! - The output path does not coincide with the source directory

use super::aggregator_config::AggregatorConfig;
use crate::CopyCodeError;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate an aggregator configuration, collecting every problem found
pub fn validate_config(config: &AggregatorConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.source_dir.as_os_str().is_empty() {
        errors.push(ValidationError::new("source_dir", "Path must not be empty"));
    }

    if config.output_path.as_os_str().is_empty() {
        errors.push(ValidationError::new("output_path", "Path must not be empty"));
    } else if config.output_path == config.source_dir {
        errors.push(ValidationError::new(
            "output_path",
            "Output path must differ from the source directory",
        ));
    }

    for (field, suffix) in [
        ("primary_suffix", &config.primary_suffix),
        ("secondary_suffix", &config.secondary_suffix),
    ] {
        if let Err(e) = validate_suffix(field, suffix) {
            errors.push(e);
        }
    }

    if config.excluded_names.iter().any(|name| name.is_empty()) {
        errors.push(ValidationError::new(
            "excluded_names",
            "Excluded names must not be empty",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_suffix(field: &str, suffix: &str) -> std::result::Result<(), ValidationError> {
    if suffix.len() < 2 {
        return Err(ValidationError::new(
            field,
            format!("Suffix '{}' is too short", suffix),
        ));
    }
    if !suffix.starts_with('.') {
        return Err(ValidationError::new(
            field,
            format!("Suffix '{}' must start with '.'", suffix),
        ));
    }
    Ok(())
}

/// Validate configuration and return a Result
pub fn validate_config_result(config: &AggregatorConfig) -> crate::Result<()> {
    validate_config(config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        CopyCodeError::Config(format!(
            "Configuration validation failed:\n  - {}",
            messages.join("\n  - ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&AggregatorConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_paths() {
        let config = AggregatorConfig::new("", "");
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "source_dir"));
        assert!(errors.iter().any(|e| e.field == "output_path"));
    }

    #[test]
    fn test_output_equal_to_source() {
        let config = AggregatorConfig::new("src", "src");
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("differ"));
    }

    #[test]
    fn test_invalid_suffixes() {
        let config = AggregatorConfig::default().with_suffixes("js", ".");
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().starts_with("primary_suffix:"));
        assert!(errors[1].message.contains("too short"));
    }

    #[test]
    fn test_empty_excluded_name() {
        let config = AggregatorConfig::default().with_excluded_names([""]);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "excluded_names");
    }

    #[test]
    fn test_validate_config_result_joins_messages() {
        let config = AggregatorConfig::new("", "").with_suffixes("a", "b");
        let err = validate_config_result(&config).unwrap_err();
        assert!(matches!(err, CopyCodeError::Config(_)));
        let message = err.to_string();
        assert!(message.contains("Configuration validation failed"));
        assert!(message.contains("secondary_suffix"));
    }
}
