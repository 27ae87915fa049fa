//! Structured presentation of result matrices
//!
//! A [`MatrixReport`] carries the dimensions and the complete set of stored
//! entries, so a result can be inspected or serialized without ever
//! materializing the dense grid.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use spmat_core::{DokMatrix, Entry, Operation, SparseMatrix};

use crate::error::Result;

/// Rendering used for matrices written to the terminal or to files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The `rows=`/`cols=`/`(row,col,value)` text format
    #[default]
    Text,
    /// Pretty printed JSON report
    Json,
}

/// Dimensions plus every stored entry, in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixReport {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    pub entries: Vec<Entry>,
}

impl MatrixReport {
    pub fn from_matrix<M: SparseMatrix + ?Sized>(matrix: &M) -> Self {
        let (rows, cols) = matrix.dimensions();
        Self {
            rows,
            cols,
            nnz: matrix.nnz(),
            entries: matrix.entries().collect(),
        }
    }

    /// Rebuild the matrix the report describes
    pub fn to_matrix(&self) -> Result<DokMatrix> {
        let matrix = DokMatrix::from_entries(
            self.rows,
            self.cols,
            self.entries.iter().map(|&entry| entry.into()),
        )?;
        Ok(matrix)
    }
}

/// Result of one operation, as rendered in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct OperationReport {
    pub operation: String,
    pub result: MatrixReport,
}

impl OperationReport {
    pub fn new(operation: Operation, matrix: &DokMatrix) -> Self {
        Self {
            operation: operation.to_string(),
            result: MatrixReport::from_matrix(matrix),
        }
    }
}

/// Render a single matrix
pub fn render_matrix(matrix: &DokMatrix, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(matrix.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&MatrixReport::from_matrix(
            matrix,
        ))?),
    }
}

/// Render the results of several operations
pub fn render_results<'a, I>(results: I, format: OutputFormat) -> Result<String>
where
    I: IntoIterator<Item = (Operation, &'a DokMatrix)>,
{
    match format {
        OutputFormat::Text => Ok(results
            .into_iter()
            .map(|(operation, matrix)| format!("# {operation}\n{matrix}"))
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => {
            let reports: Vec<OperationReport> = results
                .into_iter()
                .map(|(operation, matrix)| OperationReport::new(operation, matrix))
                .collect();
            Ok(serde_json::to_string_pretty(&reports)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DokMatrix {
        DokMatrix::from_entries(3, 3, [(2, 2, 9), (0, 0, 5), (1, 1, -3)]).unwrap()
    }

    #[test]
    fn test_report_from_matrix() {
        let report = MatrixReport::from_matrix(&sample());
        assert_eq!(report.rows, 3);
        assert_eq!(report.cols, 3);
        assert_eq!(report.nnz, 3);
        assert_eq!(
            report.entries,
            vec![Entry::new(0, 0, 5), Entry::new(1, 1, -3), Entry::new(2, 2, 9)]
        );
        assert_eq!(report.to_matrix().unwrap(), sample());
    }

    #[test]
    fn test_json_shape() {
        let json = render_matrix(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"], 3);
        assert_eq!(value["nnz"], 3);
        assert_eq!(value["entries"][1]["value"], -3);

        let report: MatrixReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, MatrixReport::from_matrix(&sample()));
    }

    #[test]
    fn test_render_results_text() {
        let a = sample();
        let text = render_results([(Operation::Add, &a)], OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "# addition\nrows=3\ncols=3\n(0,0,5)\n(1,1,-3)\n(2,2,9)"
        );
    }

    #[test]
    fn test_render_results_json() {
        let a = sample();
        let json = render_results(
            [(Operation::Add, &a), (Operation::Multiply, &a)],
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["operation"], "addition");
        assert_eq!(value[1]["operation"], "multiplication");
        assert_eq!(value[1]["result"]["entries"].as_array().unwrap().len(), 3);
    }
}
