//! A single `(row,col,value)` entry

use crate::format::constants::{ENTRY_CLOSE, ENTRY_OPEN, ENTRY_SEPARATOR};
use crate::validation::parsing::{entry_tokens, parse_index, parse_integer};
use crate::FormatIssue;

/// One stored coordinate and its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Parse a trimmed entry line such as `(2,0,-7)`
    pub fn parse(line: &str) -> Result<Self, FormatIssue> {
        let [row, col, value] = entry_tokens(line)?;
        Ok(Self {
            row: parse_index(row)?,
            col: parse_index(col)?,
            value: parse_integer(value)?,
        })
    }
}

impl From<(usize, usize, i64)> for Entry {
    fn from((row, col, value): (usize, usize, i64)) -> Self {
        Self { row, col, value }
    }
}

impl From<Entry> for (usize, usize, i64) {
    fn from(entry: Entry) -> Self {
        (entry.row, entry.col, entry.value)
    }
}

impl core::fmt::Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{ENTRY_OPEN}{}{ENTRY_SEPARATOR}{}{ENTRY_SEPARATOR}{}{ENTRY_CLOSE}",
            self.row, self.col, self.value
        )
    }
}
