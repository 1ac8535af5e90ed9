//! Configuration system
//!
//! There is no configuration file: an `AggregatorConfig` is built from
//! defaults, optionally overridden by command-line flags or environment
//! variables, and validated before a run.

mod aggregator_config;
pub mod validation;

pub use aggregator_config::{
    AggregatorConfig, DEFAULT_EXCLUDED_NAME, DEFAULT_OUTPUT_PATH, DEFAULT_PRIMARY_SUFFIX,
    DEFAULT_SECONDARY_SUFFIX, DEFAULT_SOURCE_DIR,
};
pub use validation::{validate_config, validate_config_result, ValidationError};
