//! Row-parallel sparse multiplication
//!
//! Each stored row of the left operand is multiplied on the rayon pool and
//! the finished rows are merged in ascending row order. The result is
//! identical to [`spmat_core::multiply`].

use rayon::prelude::*;
use spmat_core::ops::multiply_row;
use spmat_core::validation::validate_inner_dimensions;
use spmat_core::{DokMatrix, Result, SparseMatrix};

/// Matrix product `a * b` computed across the rayon thread pool
///
/// Neither operand is mutated. When several rows overflow, the error of
/// the lowest row is returned.
pub fn multiply_par<A, B>(a: &A, b: &B) -> Result<DokMatrix>
where
    A: SparseMatrix + Sync + ?Sized,
    B: SparseMatrix + Sync + ?Sized,
{
    let (rows, cols) = validate_inner_dimensions(a.dimensions(), b.dimensions())?;

    let products: Vec<(usize, Result<Vec<(usize, i64)>>)> = a
        .row_indices()
        .into_par_iter()
        .map(|row| (row, multiply_row(row, a.row_entries(row), b)))
        .collect();

    let mut result = DokMatrix::new(rows, cols);
    for (row, product) in products {
        for (col, value) in product? {
            result.set_element(row, col, value)?;
        }
    }

    Ok(result)
}
