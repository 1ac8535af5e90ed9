//! File eligibility predicate

use crate::config::AggregatorConfig;
use std::ffi::OsString;

/// Decides which directory entries are bundled.
///
/// A name is eligible when it ends with the primary suffix, or when it ends
/// with the secondary suffix and is not one of the excluded names. Exclusion
/// only applies to the secondary branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityFilter {
    primary_suffix: String,
    secondary_suffix: String,
    excluded_names: Vec<String>,
}

impl EligibilityFilter {
    pub fn new<I, S>(
        primary_suffix: impl Into<String>,
        secondary_suffix: impl Into<String>,
        excluded_names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            primary_suffix: primary_suffix.into(),
            secondary_suffix: secondary_suffix.into(),
            excluded_names: excluded_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the filter described by a configuration
    pub fn from_config(config: &AggregatorConfig) -> Self {
        Self::new(
            config.primary_suffix.clone(),
            config.secondary_suffix.clone(),
            config.excluded_names.iter().cloned(),
        )
    }

    pub fn is_eligible(&self, name: &str) -> bool {
        name.ends_with(&self.primary_suffix)
            || (name.ends_with(&self.secondary_suffix) && !self.is_excluded(name))
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.iter().any(|excluded| excluded == name)
    }

    /// Keep eligible names, preserving their order.
    ///
    /// Names that are not UTF-8 are judged on their lossy form, so invalid
    /// bytes never make a name match a suffix.
    pub fn apply<I>(&self, names: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = OsString>,
    {
        names
            .into_iter()
            .filter(|name| {
                let lossy = name.to_string_lossy();
                let eligible = self.is_eligible(&lossy);
                tracing::debug!(name = %lossy, eligible, "Filtered entry");
                eligible
            })
            .collect()
    }
}

impl Default for EligibilityFilter {
    fn default() -> Self {
        Self::from_config(&AggregatorConfig::default())
    }
}
