#![no_std]

//! spmat core - sparse integer matrix text format, storage and arithmetic
//!
//! This crate provides the pure pieces of the system: the hand-written
//! text format parser, the dictionary-of-keys store and the sparse
//! arithmetic engine. It performs no I/O.
//!
//! ```
//! use spmat_core::{ops, parse, SparseMatrix};
//!
//! let a = parse("rows=2\ncols=2\n(0,0,1)\n(1,1,2)").unwrap();
//! let b = parse("rows=2\ncols=2\n(0,1,3)").unwrap();
//! let product = ops::multiply(&a, &b).unwrap();
//! assert_eq!(product.get_element(0, 1), 3);
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod parse;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{Entry, MatrixHeader};
pub use matrix::DokMatrix;
pub use ops::{add, multiply, subtract};
pub use parse::{parse, parse_entries, EntryStream};
pub use traits::SparseMatrix;
