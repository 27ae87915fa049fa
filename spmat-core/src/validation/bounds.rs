//! Coordinate and dimension validation
//!
//! Pure checks used by the store and the arithmetic engine.

use crate::{Operation, SpmatError};

/// Validate that a coordinate lies inside `dims`
pub const fn validate_index(row: usize, col: usize, dims: (usize, usize)) -> Result<(), SpmatError> {
    if row >= dims.0 || col >= dims.1 {
        return Err(SpmatError::IndexOutOfBounds { row, col, dims });
    }
    Ok(())
}

/// Validate that two operands have identical shapes (element-wise operations)
pub const fn validate_same_dimensions(
    operation: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SpmatError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(SpmatError::DimensionMismatch {
            operation,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate that the inner dimensions agree for `left * right`
///
/// Returns the shape of the product.
pub const fn validate_inner_dimensions(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize), SpmatError> {
    if left.1 != right.0 {
        return Err(SpmatError::DimensionMismatch {
            operation: Operation::Multiply,
            left,
            right,
        });
    }
    Ok((left.0, right.1))
}
