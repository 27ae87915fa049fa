//! Core matrix abstraction traits
//!
//! The parser produces a concrete store, but the arithmetic engine only
//! reads its operands through this trait.

use alloc::vec::Vec;

use crate::format::Entry;

/// Read access to a sparse integer matrix
///
/// Implementations only need to materialize stored entries. Reading a
/// coordinate that is not stored yields zero.
pub trait SparseMatrix {
    /// Iterator over all stored entries in row-major order
    type Entries<'a>: Iterator<Item = Entry>
    where
        Self: 'a;

    /// Iterator over `(col, value)` pairs stored in one row, in any order
    type RowEntries<'a>: Iterator<Item = (usize, i64)>
    where
        Self: 'a;

    /// Get the value at the specified position
    ///
    /// Returns zero for coordinates that are not stored, including
    /// coordinates outside the matrix bounds.
    fn get_element(&self, row: usize, col: usize) -> i64;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries (explicit zeros included)
    fn nnz(&self) -> usize;

    /// Iterate stored entries, rows ascending and columns ascending
    /// within each row
    ///
    /// Each call starts a fresh iteration.
    fn entries(&self) -> Self::Entries<'_>;

    /// Iterate the stored entries of a single row
    ///
    /// Yields nothing for rows with no stored entries.
    fn row_entries(&self, row: usize) -> Self::RowEntries<'_>;

    /// Indices of rows holding at least one stored entry, ascending
    fn row_indices(&self) -> Vec<usize>;
}
