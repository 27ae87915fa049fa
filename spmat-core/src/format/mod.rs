//! Text format definitions for sparse matrix descriptions
//!
//! A description is two `label=integer` header lines followed by
//! `(row,col,value)` entry lines. This module holds the pure format
//! pieces; the line-level tokenizing lives in [`crate::validation`].

pub mod constants;
pub mod entry;
pub mod header;

// Re-export format definitions
pub use entry::Entry;
pub use header::MatrixHeader;
