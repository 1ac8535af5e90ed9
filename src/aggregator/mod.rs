//! Source directory aggregator
//!
//! Lists one directory, keeps the eligible files in byte-wise name order, and
//! concatenates them into a single document of headed blocks.

mod document;
mod filter;
mod source_aggregator;

pub use document::{format_block, CombinedDocument, BLOCK_SEPARATOR};
pub use filter::EligibilityFilter;
pub use source_aggregator::{
    aggregate, eligible_files, list_entry_names, AggregateReport, Aggregator,
};
