//! copycode - Bundle a directory's source files into one pasteable document
//!
//! Lists a single source directory, keeps the files whose names carry one of
//! the recognized suffixes, and writes their contents, each under a
//! `name:` header and `=` rule, into one output file.
//!
//! # Architecture
//!
//! - **aggregator**: Listing, eligibility filter, block formatting, run orchestration
//! - **config**: Aggregator settings and their validation
//! - **storage**: Atomic replacement of the output file
//! - **logging**: tracing subscriber setup

// Core modules
pub mod aggregator;
pub mod config;
pub mod error;
pub mod storage;

// Support
pub mod logging;

// Re-exports
pub use aggregator::{aggregate, AggregateReport, Aggregator};
pub use config::AggregatorConfig;
pub use error::{CopyCodeError, Result};
