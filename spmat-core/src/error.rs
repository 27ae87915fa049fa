//! Error types for sparse matrix parsing and arithmetic

/// Arithmetic operation that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::Subtract => write!(f, "subtraction"),
            Operation::Multiply => write!(f, "multiplication"),
        }
    }
}

/// Specific reason a line of matrix text was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Header line (row or column count) is absent
    MissingHeader,
    /// Header line has no `=` delimiter
    MissingDelimiter,
    /// Token is not an optionally signed run of decimal digits
    InvalidInteger,
    /// Integer does not fit the target type
    IntegerOverflow,
    /// Dimension or index is negative
    NegativeValue,
    /// Entry line is not wrapped in parentheses
    BadEntryShape,
    /// Entry body does not split into exactly three tokens
    WrongTokenCount(usize),
}

impl core::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatIssue::MissingHeader => write!(f, "missing dimension header"),
            FormatIssue::MissingDelimiter => write!(f, "header has no '=' delimiter"),
            FormatIssue::InvalidInteger => write!(f, "malformed integer"),
            FormatIssue::IntegerOverflow => write!(f, "integer out of range"),
            FormatIssue::NegativeValue => write!(f, "negative dimension or index"),
            FormatIssue::BadEntryShape => write!(f, "bad format, expected (row,col,value)"),
            FormatIssue::WrongTokenCount(n) => {
                write!(f, "bad format, expected 3 comma separated values, found {n}")
            }
        }
    }
}

/// Errors that can occur while parsing or combining sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Malformed matrix text (line is 1-based)
    Format { line: usize, issue: FormatIssue },
    /// Operand dimensions are incompatible with the operation
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Coordinate outside the declared matrix bounds
    IndexOutOfBounds {
        row: usize,
        col: usize,
        dims: (usize, usize),
    },
    /// Entry line of matrix text addresses a coordinate outside the header
    EntryOutOfBounds {
        line: usize,
        row: usize,
        col: usize,
        dims: (usize, usize),
    },
    /// Result value does not fit in the element type
    Overflow {
        operation: Operation,
        row: usize,
        col: usize,
    },
}

/// Coarse classification of [`SpmatError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Dimension,
    Index,
    Overflow,
}

impl SpmatError {
    /// Build a format error for a 1-based line number
    pub const fn format(line: usize, issue: FormatIssue) -> Self {
        SpmatError::Format { line, issue }
    }

    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::Format { .. } => ErrorCategory::Format,
            SpmatError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            SpmatError::IndexOutOfBounds { .. } | SpmatError::EntryOutOfBounds { .. } => {
                ErrorCategory::Index
            }
            SpmatError::Overflow { .. } => ErrorCategory::Overflow,
        }
    }

    /// Attach the 1-based line of matrix text an index error came from
    pub const fn at_line(self, line: usize) -> Self {
        match self {
            SpmatError::IndexOutOfBounds { row, col, dims } => SpmatError::EntryOutOfBounds {
                line,
                row,
                col,
                dims,
            },
            other => other,
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::Format { line, issue } => {
                write!(f, "Input has wrong format at line {line}: {issue}")
            }
            SpmatError::DimensionMismatch {
                operation: Operation::Multiply,
                left,
                right,
            } => write!(
                f,
                "Matrix multiplication is not possible: {}x{} times {}x{} (column count of the first must match row count of the second)",
                left.0, left.1, right.0, right.1
            ),
            SpmatError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "Matrix dimensions do not match for {operation}: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            SpmatError::IndexOutOfBounds { row, col, dims } => write!(
                f,
                "Index ({row}, {col}) out of bounds for {}x{} matrix",
                dims.0, dims.1
            ),
            SpmatError::EntryOutOfBounds {
                line,
                row,
                col,
                dims,
            } => write!(
                f,
                "Input has wrong format at line {line}: index ({row}, {col}) out of bounds for {}x{} matrix",
                dims.0, dims.1
            ),
            SpmatError::Overflow {
                operation,
                row,
                col,
            } => write!(f, "Integer overflow during {operation} at ({row}, {col})"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
