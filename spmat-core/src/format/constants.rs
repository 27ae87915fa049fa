//! Delimiters and layout constants for the matrix text format

/// Line separator; no other line ending normalization is performed
pub const LINE_SEPARATOR: char = '\n';

/// Separates the ignored label from the value in a header line
pub const HEADER_DELIMITER: char = '=';

/// Opens an entry line
pub const ENTRY_OPEN: char = '(';

/// Closes an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separates the tokens inside an entry
pub const ENTRY_SEPARATOR: char = ',';

/// Number of tokens in an entry: row, column, value
pub const ENTRY_TOKEN_COUNT: usize = 3;

/// Number of header lines preceding the entries
pub const HEADER_LINES: usize = 2;

/// Labels written when rendering a matrix back to text
pub mod labels {
    pub const ROWS: &str = "rows";
    pub const COLS: &str = "cols";
}
