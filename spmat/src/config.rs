//! Run configuration for the compute pipeline

use std::path::PathBuf;

use clap::ValueEnum;
use spmat_core::Operation;

use crate::report::OutputFormat;

/// Which operations a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OperationChoice {
    Add,
    Subtract,
    Multiply,
    /// Sum, difference and product, in that order
    #[default]
    All,
}

impl OperationChoice {
    /// Operations to run, in execution order
    pub fn operations(self) -> &'static [Operation] {
        match self {
            OperationChoice::Add => &[Operation::Add],
            OperationChoice::Subtract => &[Operation::Subtract],
            OperationChoice::Multiply => &[Operation::Multiply],
            OperationChoice::All => &[Operation::Add, Operation::Subtract, Operation::Multiply],
        }
    }
}

/// Where matrix text is loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceKind {
    /// Files relative to a base directory
    #[default]
    File,
    /// The bundled sample matrices
    Embedded,
    /// HTTP relative to a base URL
    Http,
}

/// Configuration for computing results from two matrices
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Operations to perform
    pub operation: OperationChoice,
    /// Rendering for printed and saved results
    pub format: OutputFormat,
    /// Use the rayon row-parallel multiply
    pub parallel: bool,
    /// Drop explicitly stored zeros from results
    pub compact: bool,
    /// Directory results are saved to; nothing is saved when unset
    pub output_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn with_operation(mut self, operation: OperationChoice) -> Self {
        self.operation = operation;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Save results under `output_dir`
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_choice() {
        assert_eq!(OperationChoice::Add.operations(), &[Operation::Add]);
        assert_eq!(OperationChoice::All.operations().len(), 3);
        assert_eq!(OperationChoice::default(), OperationChoice::All);
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::default()
            .with_operation(OperationChoice::Multiply)
            .with_format(OutputFormat::Json)
            .with_parallel(true)
            .with_output_dir("out");

        assert_eq!(config.operation, OperationChoice::Multiply);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.parallel);
        assert!(!config.compact);
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
    }
}
