//! Validation and tokenizing utilities for sparse matrix text
//!
//! This module contains pure functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_index, validate_inner_dimensions, validate_same_dimensions};
pub use parsing::{entry_tokens, header_value, parse_index, parse_integer, split_lines, trim_spaces};
