//! Compute pipeline: run the configured operations over two matrices

use std::path::PathBuf;
use std::time::{Duration, Instant};

use spmat_core::{add, multiply, subtract, DokMatrix, Operation, SparseMatrix};
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::Result;
use crate::output::save_result;
use crate::parallel::multiply_par;

/// Result of one operation in a run
#[derive(Debug, Clone)]
pub struct OperationOutcome {
    pub operation: Operation,
    pub result: DokMatrix,
    pub elapsed: Duration,
    /// File the result was saved to, when an output directory is set
    pub saved_to: Option<PathBuf>,
}

/// Apply a single operation
pub fn apply(operation: Operation, a: &DokMatrix, b: &DokMatrix, parallel: bool) -> Result<DokMatrix> {
    let result = match operation {
        Operation::Add => add(a, b)?,
        Operation::Subtract => subtract(a, b)?,
        Operation::Multiply if parallel => multiply_par(a, b)?,
        Operation::Multiply => multiply(a, b)?,
    };
    Ok(result)
}

/// Run every configured operation over `a` and `b`
///
/// Stops at the first failing operation.
pub fn run(a: &DokMatrix, b: &DokMatrix, config: &RunConfig) -> Result<Vec<OperationOutcome>> {
    let mut outcomes = Vec::new();

    for &operation in config.operation.operations() {
        let start = Instant::now();
        let mut result = apply(operation, a, b, config.parallel)?;
        let elapsed = start.elapsed();

        if config.compact {
            result = result.compact();
        }

        let (rows, cols) = result.dimensions();
        info!(%operation, rows, cols, nnz = result.nnz(), ?elapsed, "computed");

        let saved_to = match &config.output_dir {
            Some(dir) => Some(save_result(dir, operation, &result, config.format)?),
            None => None,
        };

        outcomes.push(OperationOutcome {
            operation,
            result,
            elapsed,
            saved_to,
        });
    }

    debug!(operations = outcomes.len(), "run finished");
    Ok(outcomes)
}
