//! Dictionary-of-keys sparse matrix store
//!
//! [`DokMatrix`] keeps a map of rows, each holding a map of columns to
//! values. Point reads and writes are O(1) amortized and iteration visits
//! only stored entries.

use alloc::vec::Vec;
use hashbrown::{hash_map, HashMap};

use crate::format::{Entry, MatrixHeader};
use crate::traits::SparseMatrix;
use crate::validation::validate_index;
use crate::Result;

/// Sparse integer matrix with fixed dimensions
///
/// Equality is by value: two matrices are equal when they have the same
/// dimensions and every coordinate reads the same, regardless of whether
/// zeros are stored explicitly.
#[derive(Debug, Clone)]
pub struct DokMatrix {
    rows: usize,
    cols: usize,
    data: HashMap<usize, HashMap<usize, i64>>,
    nnz: usize,
}

impl DokMatrix {
    /// Create an empty matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: HashMap::new(),
            nnz: 0,
        }
    }

    /// Create an empty matrix with the dimensions of a parsed header
    pub fn from_header(header: MatrixHeader) -> Self {
        let (rows, cols) = header.dimensions();
        Self::new(rows, cols)
    }

    /// Build a matrix from entries, later entries overwriting earlier ones
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn header(&self) -> MatrixHeader {
        MatrixHeader::new(self.rows, self.cols)
    }

    /// Insert or overwrite the value at `(row, col)`
    ///
    /// Zero is stored as given. Fails when the coordinate is outside the
    /// declared dimensions.
    pub fn set_element(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        validate_index(row, col, (self.rows, self.cols))?;

        if self
            .data
            .entry(row)
            .or_default()
            .insert(col, value)
            .is_none()
        {
            self.nnz += 1;
        }
        Ok(())
    }

    /// Whether every coordinate reads as zero
    pub fn is_zero(&self) -> bool {
        self.data
            .values()
            .all(|row| row.values().all(|&value| value == 0))
    }

    /// Copy of this matrix without explicitly stored zeros
    pub fn compact(&self) -> Self {
        let mut data: HashMap<usize, HashMap<usize, i64>> = HashMap::new();
        let mut nnz = 0;

        for (&row, cols) in &self.data {
            let kept: HashMap<usize, i64> = cols
                .iter()
                .filter(|(_, value)| **value != 0)
                .map(|(&col, &value)| (col, value))
                .collect();
            if !kept.is_empty() {
                nnz += kept.len();
                data.insert(row, kept);
            }
        }

        Self {
            rows: self.rows,
            cols: self.cols,
            data,
            nnz,
        }
    }

    /// Collect stored entries in row-major order
    pub fn to_entries(&self) -> Vec<Entry> {
        self.entries().collect()
    }
}

impl SparseMatrix for DokMatrix {
    type Entries<'a> = Entries<'a>;
    type RowEntries<'a> = RowEntries<'a>;

    fn get_element(&self, row: usize, col: usize) -> i64 {
        self.data
            .get(&row)
            .and_then(|cols| cols.get(&col))
            .copied()
            .unwrap_or(0)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.nnz
    }

    fn entries(&self) -> Entries<'_> {
        Entries {
            matrix: self,
            rows: self.row_indices().into_iter(),
            current: None,
        }
    }

    fn row_entries(&self, row: usize) -> RowEntries<'_> {
        RowEntries {
            inner: self.data.get(&row).map(|cols| cols.iter()),
        }
    }

    fn row_indices(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self
            .data
            .iter()
            .filter(|(_, cols)| !cols.is_empty())
            .map(|(&row, _)| row)
            .collect();
        rows.sort_unstable();
        rows
    }
}

impl PartialEq for DokMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .entries()
                .all(|e| other.get_element(e.row, e.col) == e.value)
            && other
                .entries()
                .all(|e| self.get_element(e.row, e.col) == e.value)
    }
}

impl Eq for DokMatrix {}

/// Renders the matrix in the text format accepted by [`crate::parse()`]
impl core::fmt::Display for DokMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.header())?;
        for entry in self.entries() {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}

/// Row-major iterator over the stored entries of a [`DokMatrix`]
///
/// Rows are visited in ascending order; each row's columns are sorted
/// when the iterator reaches it.
#[derive(Debug)]
pub struct Entries<'a> {
    matrix: &'a DokMatrix,
    rows: alloc::vec::IntoIter<usize>,
    current: Option<(usize, alloc::vec::IntoIter<(usize, i64)>)>,
}

impl Iterator for Entries<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            if let Some((row, cols)) = &mut self.current {
                if let Some((col, value)) = cols.next() {
                    return Some(Entry::new(*row, col, value));
                }
            }

            let row = self.rows.next()?;
            let mut cols: Vec<(usize, i64)> = self.matrix.row_entries(row).collect();
            cols.sort_unstable_by_key(|&(col, _)| col);
            self.current = Some((row, cols.into_iter()));
        }
    }
}

/// Unordered iterator over `(col, value)` pairs of one row
#[derive(Debug, Clone)]
pub struct RowEntries<'a> {
    inner: Option<hash_map::Iter<'a, usize, i64>>,
}

impl Iterator for RowEntries<'_> {
    type Item = (usize, i64);

    fn next(&mut self) -> Option<(usize, i64)> {
        self.inner
            .as_mut()?
            .next()
            .map(|(&col, &value)| (col, value))
    }
}
