//! Sparse matrix arithmetic
//!
//! Every operation reads its operands through [`SparseMatrix`] and builds a
//! fresh [`DokMatrix`]; operands are never mutated. Work is proportional
//! to the number of stored entries, never to the dense dimensions.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::matrix::DokMatrix;
use crate::traits::SparseMatrix;
use crate::validation::{validate_inner_dimensions, validate_same_dimensions};
use crate::{Operation, Result, SpmatError};

/// Element-wise sum `a + b`
pub fn add<A, B>(a: &A, b: &B) -> Result<DokMatrix>
where
    A: SparseMatrix + ?Sized,
    B: SparseMatrix + ?Sized,
{
    combine(a, b, Operation::Add, i64::checked_add)
}

/// Element-wise difference `a - b`
pub fn subtract<A, B>(a: &A, b: &B) -> Result<DokMatrix>
where
    A: SparseMatrix + ?Sized,
    B: SparseMatrix + ?Sized,
{
    combine(a, b, Operation::Subtract, i64::checked_sub)
}

/// Two-pass element-wise combination
///
/// The result starts as a copy of `a`'s stored entries. Each stored entry
/// of `b` then overwrites its cell with `op(a[r][c], b[r][c])`. Cells
/// stored only in `a` keep `a`'s value.
fn combine<A, B>(
    a: &A,
    b: &B,
    operation: Operation,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<DokMatrix>
where
    A: SparseMatrix + ?Sized,
    B: SparseMatrix + ?Sized,
{
    validate_same_dimensions(operation, a.dimensions(), b.dimensions())?;

    let (rows, cols) = a.dimensions();
    let mut result = DokMatrix::new(rows, cols);

    for entry in a.entries() {
        result.set_element(entry.row, entry.col, entry.value)?;
    }

    for entry in b.entries() {
        let value = op(a.get_element(entry.row, entry.col), entry.value).ok_or(
            SpmatError::Overflow {
                operation,
                row: entry.row,
                col: entry.col,
            },
        )?;
        result.set_element(entry.row, entry.col, value)?;
    }

    Ok(result)
}

/// Matrix product `a * b`
///
/// Walks `a` row by row. For each stored `(row, k)` only the stored
/// entries of row `k` in `b` are visited.
pub fn multiply<A, B>(a: &A, b: &B) -> Result<DokMatrix>
where
    A: SparseMatrix + ?Sized,
    B: SparseMatrix + ?Sized,
{
    let (rows, cols) = validate_inner_dimensions(a.dimensions(), b.dimensions())?;
    let mut result = DokMatrix::new(rows, cols);

    for row in a.row_indices() {
        for (col, value) in multiply_row(row, a.row_entries(row), b)? {
            result.set_element(row, col, value)?;
        }
    }

    Ok(result)
}

/// Compute one row of a product
///
/// `a_row` yields the `(k, value)` pairs stored in row `row` of the left
/// operand. Returns the accumulated `(col, value)` pairs of the product
/// row in no particular order. Accumulated zeros are kept.
pub fn multiply_row<B, I>(row: usize, a_row: I, b: &B) -> Result<Vec<(usize, i64)>>
where
    B: SparseMatrix + ?Sized,
    I: IntoIterator<Item = (usize, i64)>,
{
    let mut accumulator: HashMap<usize, i64> = HashMap::new();
    let overflow = |col| SpmatError::Overflow {
        operation: Operation::Multiply,
        row,
        col,
    };

    for (k, a_value) in a_row {
        for (col, b_value) in b.row_entries(k) {
            let product = a_value.checked_mul(b_value).ok_or(overflow(col))?;
            let slot = accumulator.entry(col).or_insert(0);
            *slot = slot.checked_add(product).ok_or(overflow(col))?;
        }
    }

    Ok(accumulator.into_iter().collect())
}
