//! Aggregator configuration
//!
//! Defaults reproduce the reference behavior: read `src/`, keep `.js` and
//! `.css` files, write `all_code_to_copy.txt` in the working directory.

use std::path::{Path, PathBuf};

/// Default source directory
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Default output file
pub const DEFAULT_OUTPUT_PATH: &str = "all_code_to_copy.txt";

/// Default primary suffix (always included)
pub const DEFAULT_PRIMARY_SUFFIX: &str = ".js";

/// Default secondary suffix (included unless the name is excluded)
pub const DEFAULT_SECONDARY_SUFFIX: &str = ".css";

/// Name of the aggregator's own script, never bundled
pub const DEFAULT_EXCLUDED_NAME: &str = "copy_code.py";

/// Aggregator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Directory whose entries are bundled (not recursed)
    pub source_dir: PathBuf,

    /// File that receives the combined document
    pub output_path: PathBuf,

    /// Suffix that always makes a file eligible
    pub primary_suffix: String,

    /// Suffix that makes a file eligible unless its name is excluded
    pub secondary_suffix: String,

    /// Names excluded from the secondary-suffix branch
    pub excluded_names: Vec<String>,
}

impl AggregatorConfig {
    /// Create a configuration for the given paths with the default filter
    pub fn new(source_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Replace the primary and secondary suffixes
    pub fn with_suffixes(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_suffix = primary.into();
        self.secondary_suffix = secondary.into();
        self
    }

    /// Replace the excluded names
    pub fn with_excluded_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            primary_suffix: DEFAULT_PRIMARY_SUFFIX.to_string(),
            secondary_suffix: DEFAULT_SECONDARY_SUFFIX.to_string(),
            excluded_names: vec![DEFAULT_EXCLUDED_NAME.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_behavior() {
        let config = AggregatorConfig::default();
        assert_eq!(config.source_dir(), Path::new("src"));
        assert_eq!(config.output_path(), Path::new("all_code_to_copy.txt"));
        assert_eq!(config.primary_suffix, ".js");
        assert_eq!(config.secondary_suffix, ".css");
        assert_eq!(config.excluded_names, vec!["copy_code.py".to_string()]);
    }

    #[test]
    fn test_new_keeps_default_filter() {
        let config = AggregatorConfig::new("web", "bundle.txt");
        assert_eq!(config.source_dir(), Path::new("web"));
        assert_eq!(config.output_path(), Path::new("bundle.txt"));
        assert_eq!(config.primary_suffix, ".js");
    }

    #[test]
    fn test_builders() {
        let config = AggregatorConfig::default()
            .with_suffixes(".ts", ".scss")
            .with_excluded_names(["a.scss", "b.scss"]);
        assert_eq!(config.primary_suffix, ".ts");
        assert_eq!(config.secondary_suffix, ".scss");
        assert_eq!(config.excluded_names.len(), 2);
    }
}
