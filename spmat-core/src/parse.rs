//! Text to matrix pipeline
//!
//! [`parse`] reads the dimension header, then applies every entry line to
//! a fresh [`DokMatrix`]. [`parse_entries`] exposes the same validation as
//! a stream for callers that build their own store.

use crate::format::constants::HEADER_LINES;
use crate::format::{Entry, MatrixHeader};
use crate::matrix::DokMatrix;
use crate::validation::parsing::{split_lines, trim_spaces, Lines};
use crate::{Result, SpmatError};

/// Parse a matrix description
///
/// Later entries for the same coordinate overwrite earlier ones. Entries
/// outside the declared dimensions fail with
/// [`SpmatError::EntryOutOfBounds`] naming their line.
pub fn parse(text: &str) -> Result<DokMatrix> {
    let (header, mut entries) = parse_entries(text)?;
    let mut matrix = DokMatrix::from_header(header);

    while let Some(entry) = entries.next() {
        let entry = entry?;
        matrix
            .set_element(entry.row, entry.col, entry.value)
            .map_err(|err| err.at_line(entries.line_number()))?;
    }

    Ok(matrix)
}

/// Parse the header and return a stream over the entry lines
///
/// Blank lines (after trimming spaces and tabs) are skipped. Each item is
/// either a parsed entry or the format error of its line.
pub fn parse_entries(text: &str) -> Result<(MatrixHeader, EntryStream<'_>)> {
    let mut lines = split_lines(text);
    let header = MatrixHeader::parse(lines.next(), lines.next())?;

    Ok((
        header,
        EntryStream {
            lines,
            line_number: HEADER_LINES,
        },
    ))
}

/// Stream of validated entries following the header
#[derive(Debug, Clone)]
pub struct EntryStream<'a> {
    lines: Lines<'a>,
    line_number: usize,
}

impl EntryStream<'_> {
    /// 1-based line of the most recently yielded item
    ///
    /// Before the first item this is the last header line.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl Iterator for EntryStream<'_> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.lines.next()?;
            self.line_number += 1;

            let line = trim_spaces(raw);
            if line.is_empty() {
                continue;
            }

            let line_number = self.line_number;
            return Some(Entry::parse(line).map_err(|issue| SpmatError::format(line_number, issue)));
        }
    }
}

impl core::str::FromStr for DokMatrix {
    type Err = SpmatError;

    fn from_str(text: &str) -> Result<Self> {
        parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SparseMatrix;
    use crate::{ErrorCategory, FormatIssue};
    use alloc::string::ToString;
    use alloc::vec::Vec;

    const SAMPLE_A: &str = "rows=3\ncols=3\n(0,0,5)\n(1,1,-3)\n(2,2,9)";
    const SAMPLE_B: &str = "rows=3\ncols=3\n(0,1,4)\n(1,0,-2)\n(2,1,6)";

    #[test]
    fn test_parse_sample() {
        let matrix = parse(SAMPLE_A).unwrap();
        assert_eq!(matrix.dimensions(), (3, 3));
        assert_eq!(
            matrix.to_entries(),
            [Entry::new(0, 0, 5), Entry::new(1, 1, -3), Entry::new(2, 2, 9)]
        );
    }

    #[test]
    fn test_parse_then_add_samples() {
        let a = parse(SAMPLE_A).unwrap();
        let b = parse(SAMPLE_B).unwrap();
        let sum = crate::ops::add(&a, &b).unwrap();

        let triples: Vec<(usize, usize, i64)> = sum.entries().map(Into::into).collect();
        assert_eq!(
            triples,
            [(0, 0, 5), (0, 1, 4), (1, 0, -2), (1, 1, -3), (2, 1, 6), (2, 2, 9)]
        );
    }

    #[test]
    fn test_header_dimensions() {
        for (rows, cols) in [(0, 0), (1, 7), (12, 3), (1000, 1)] {
            let text = alloc::format!("rows={rows}\ncols={cols}");
            assert_eq!(parse(&text).unwrap().dimensions(), (rows, cols));
        }
    }

    #[test]
    fn test_last_write_wins() {
        let matrix = parse("rows=2\ncols=2\n(1,1,3)\n(1,1,8)").unwrap();
        assert_eq!(matrix.get_element(1, 1), 8);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_blank_and_padded_lines() {
        let text = "r=2\nc=2\n\n  (0,1,2)\t\n \t \n\t(1,0,-1)  \n";
        let matrix = parse(text).unwrap();
        assert_eq!(matrix.get_element(0, 1), 2);
        assert_eq!(matrix.get_element(1, 0), -1);
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(
            parse("rows=3\ncols=3\n(1,2)"),
            Err(SpmatError::format(3, FormatIssue::WrongTokenCount(2)))
        );
        assert_eq!(
            parse("rows=3\ncols=3\n(0,0,1)\n\n1,2,3"),
            Err(SpmatError::format(5, FormatIssue::BadEntryShape))
        );
        assert_eq!(
            parse("rows=3\ncols=3\n(0,0,1x)").unwrap_err().category(),
            ErrorCategory::Format
        );
        // Carriage returns are not stripped
        assert_eq!(
            parse("rows=1\r\ncols=1\r\n"),
            Err(SpmatError::format(1, FormatIssue::InvalidInteger))
        );
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            parse(""),
            Err(SpmatError::format(1, FormatIssue::MissingHeader))
        );
        assert_eq!(
            parse("rows=3\n"),
            Err(SpmatError::format(2, FormatIssue::MissingHeader))
        );
    }

    #[test]
    fn test_entry_out_of_bounds() {
        assert_eq!(
            parse("rows=2\ncols=2\n(2,0,1)"),
            Err(SpmatError::EntryOutOfBounds {
                line: 3,
                row: 2,
                col: 0,
                dims: (2, 2)
            })
        );

        // Blank lines still count toward the reported line
        let err = parse("rows=2\ncols=2\n\n(0,0,1)\n(5,0,1)").unwrap_err();
        assert_eq!(
            err,
            SpmatError::EntryOutOfBounds {
                line: 5,
                row: 5,
                col: 0,
                dims: (2, 2)
            }
        );
        assert_eq!(err.category(), ErrorCategory::Index);
        assert!(err.to_string().contains("line 5"));
    }

    #[test]
    fn test_entry_stream() {
        let (header, mut entries) = parse_entries("rows=4\ncols=4\n(3,3,1)\n\nbad").unwrap();
        assert_eq!(header, MatrixHeader::new(4, 4));
        assert_eq!(header.dimensions(), (4, 4));
        assert_eq!(entries.line_number(), 2);
        assert_eq!(entries.next(), Some(Ok(Entry::new(3, 3, 1))));
        assert_eq!(entries.line_number(), 3);

        let items: Vec<Result<Entry>> = entries.collect();
        assert_eq!(
            items,
            [Err(SpmatError::format(5, FormatIssue::BadEntryShape))]
        );
    }

    #[test]
    fn test_display_round_trip() {
        let matrix = parse("rows=5\ncols=2\n(4,1,-7)\n(0,0,3)\n(2,1,0)").unwrap();
        let reparsed: DokMatrix = matrix.to_string().parse().unwrap();
        assert_eq!(reparsed, matrix);
        assert_eq!(reparsed.nnz(), 3);
    }
}
