//! Storage layer
//!
//! Writes the combined document to disk without ever exposing a partially
//! written output file.

mod atomic;

pub use atomic::{write_atomic, AtomicWriter};
