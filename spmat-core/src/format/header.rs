//! Dimension header of a matrix description
//!
//! The first two lines of a description declare the row and column
//! counts as `label=integer`. Labels are not checked.

use crate::format::constants::{labels, HEADER_DELIMITER};
use crate::validation::parsing::{header_value, parse_index};
use crate::{FormatIssue, SpmatError};

/// Declared dimensions of a matrix description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl MatrixHeader {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse a single `label=integer` header line
    pub fn parse_dimension(line: &str) -> Result<usize, FormatIssue> {
        parse_index(header_value(line)?)
    }

    /// Parse the row and column header lines
    ///
    /// Either line may be absent, in which case the error points at the
    /// line that should have held it.
    pub fn parse(row_line: Option<&str>, col_line: Option<&str>) -> Result<Self, SpmatError> {
        let row_line = row_line.ok_or(SpmatError::format(1, FormatIssue::MissingHeader))?;
        let rows = Self::parse_dimension(row_line).map_err(|issue| SpmatError::format(1, issue))?;

        let col_line = col_line.ok_or(SpmatError::format(2, FormatIssue::MissingHeader))?;
        let cols = Self::parse_dimension(col_line).map_err(|issue| SpmatError::format(2, issue))?;

        Ok(Self { rows, cols })
    }

    /// Dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl core::fmt::Display for MatrixHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}{HEADER_DELIMITER}{}", labels::ROWS, self.rows)?;
        write!(f, "{}{HEADER_DELIMITER}{}", labels::COLS, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            MatrixHeader::parse(Some("rows=3"), Some("cols=4")),
            Ok(MatrixHeader::new(3, 4))
        );
        // Labels are ignored
        assert_eq!(
            MatrixHeader::parse(Some("height=0"), Some("x=10")),
            Ok(MatrixHeader::new(0, 10))
        );
    }

    #[test]
    fn test_parse_header_errors() {
        assert_eq!(
            MatrixHeader::parse(None, None),
            Err(SpmatError::format(1, FormatIssue::MissingHeader))
        );
        assert_eq!(
            MatrixHeader::parse(Some("rows=3"), None),
            Err(SpmatError::format(2, FormatIssue::MissingHeader))
        );
        assert_eq!(
            MatrixHeader::parse(Some("rows 3"), Some("cols=3")),
            Err(SpmatError::format(1, FormatIssue::MissingDelimiter))
        );
        assert_eq!(
            MatrixHeader::parse(Some("rows=3"), Some("cols=three")),
            Err(SpmatError::format(2, FormatIssue::InvalidInteger))
        );
        assert_eq!(
            MatrixHeader::parse(Some("rows=-3"), Some("cols=3")),
            Err(SpmatError::format(1, FormatIssue::NegativeValue))
        );
        assert_eq!(
            MatrixHeader::parse(Some("rows=3\r"), Some("cols=3")),
            Err(SpmatError::format(1, FormatIssue::InvalidInteger))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(MatrixHeader::new(2, 5).to_string(), "rows=2\ncols=5");
    }
}
