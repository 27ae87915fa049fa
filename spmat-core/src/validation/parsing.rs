//! Tokenizing utilities for the matrix text format
//!
//! This module provides pure, allocation-free parsing functions for the
//! pieces of a matrix description. Errors are reported as [`FormatIssue`]
//! values; callers attach the line number.

use crate::format::constants::{
    ENTRY_CLOSE, ENTRY_OPEN, ENTRY_SEPARATOR, ENTRY_TOKEN_COUNT, HEADER_DELIMITER, LINE_SEPARATOR,
};
use crate::FormatIssue;

/// Iterator over the logical lines of a matrix description
///
/// Splits on `\n` only. A carriage return stays part of its line. A final
/// unterminated line is yielded; the empty segment after a trailing `\n`
/// is not.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.rest?;
        match text.find(LINE_SEPARATOR) {
            Some(pos) => {
                self.rest = Some(&text[pos + 1..]);
                Some(&text[..pos])
            }
            None => {
                self.rest = None;
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
        }
    }
}

/// Split text into logical lines
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: Some(text) }
}

/// Trim leading and trailing spaces and tabs (and nothing else)
pub fn trim_spaces(line: &str) -> &str {
    line.trim_matches(|c| c == ' ' || c == '\t')
}

/// Extract the value part of a `label=value` header line
///
/// The label is ignored; the split happens at the first `=`.
pub fn header_value(line: &str) -> Result<&str, FormatIssue> {
    match line.find(HEADER_DELIMITER) {
        Some(pos) => Ok(&line[pos + 1..]),
        None => Err(FormatIssue::MissingDelimiter),
    }
}

/// Check that a trimmed line has the `(...)` entry shape
pub fn is_entry_shape(line: &str) -> bool {
    line.len() > 2 && line.starts_with(ENTRY_OPEN) && line.ends_with(ENTRY_CLOSE)
}

/// Split an entry line into its row, column and value tokens
///
/// The line must already be trimmed. Tokens are not trimmed, so
/// `(0, 1, 5)` yields tokens that fail integer parsing.
pub fn entry_tokens(line: &str) -> Result<[&str; ENTRY_TOKEN_COUNT], FormatIssue> {
    if !is_entry_shape(line) {
        return Err(FormatIssue::BadEntryShape);
    }

    let body = &line[1..line.len() - 1];
    let mut tokens = [""; ENTRY_TOKEN_COUNT];
    let mut count = 0;

    for token in body.split(ENTRY_SEPARATOR) {
        if count < ENTRY_TOKEN_COUNT {
            tokens[count] = token;
        }
        count += 1;
    }

    if count != ENTRY_TOKEN_COUNT {
        return Err(FormatIssue::WrongTokenCount(count));
    }

    Ok(tokens)
}

/// Parse an optionally negative decimal integer
///
/// Accepts a single leading `-` followed by one or more ASCII digits.
/// Anything else, including `+`, spaces and an empty token, is rejected.
pub fn parse_integer(token: &str) -> Result<i64, FormatIssue> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    if digits.is_empty() {
        return Err(FormatIssue::InvalidInteger);
    }

    let mut result: i64 = 0;

    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(FormatIssue::InvalidInteger);
        }

        let digit = (byte - b'0') as i64;

        // Accumulate toward the sign so i64::MIN is representable
        result = result
            .checked_mul(10)
            .and_then(|r| {
                if negative {
                    r.checked_sub(digit)
                } else {
                    r.checked_add(digit)
                }
            })
            .ok_or(FormatIssue::IntegerOverflow)?;
    }

    Ok(result)
}

/// Parse a non-negative integer used as a dimension or index
///
/// Digits accumulate directly into `usize`, so the full index range is
/// accepted. A leading `-` is only valid on zero.
pub fn parse_index(token: &str) -> Result<usize, FormatIssue> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(FormatIssue::InvalidInteger);
    }

    if negative {
        return match digits.bytes().all(|byte| byte == b'0') {
            true => Ok(0),
            false => Err(FormatIssue::NegativeValue),
        };
    }

    let mut result: usize = 0;

    for byte in digits.bytes() {
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add((byte - b'0') as usize))
            .ok_or(FormatIssue::IntegerOverflow)?;
    }

    Ok(result)
}
