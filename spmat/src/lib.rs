//! spmat - sparse integer matrices from text
//!
//! This library loads matrix descriptions from files, embedded samples or
//! HTTP, combines them with the sparse arithmetic from `spmat-core` and
//! presents the results as text or JSON.
//!
//! ## Architecture
//!
//! spmat follows a pure/impure split:
//!
//! - **spmat-core**: text format, parser, store and arithmetic (no I/O, no_std)
//! - **spmat**: text sources, parallel multiply, reports, output files and the CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat::{load_matrix, pipeline, EmbeddedSource, RunConfig};
//!
//! fn example() -> spmat::Result<()> {
//!     let source = EmbeddedSource::with_samples();
//!     let a = load_matrix(&source, "sample_inputs/input1.txt")?;
//!     let b = load_matrix(&source, "sample_inputs/input2.txt")?;
//!
//!     for outcome in pipeline::run(&a, &b, &RunConfig::default())? {
//!         println!("{}:\n{}", outcome.operation, outcome.result);
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core abstractions
pub use spmat_core::{
    // Store and traits
    DokMatrix, Entry, MatrixHeader, SparseMatrix,
    // Arithmetic and parsing
    add, multiply, parse, subtract,
    // Error handling
    ErrorCategory, FormatIssue, Operation, SpmatError,
};

pub mod config;
pub mod error;
pub mod output;
pub mod parallel;
pub mod pipeline;
pub mod report;
pub mod source;

pub use config::{OperationChoice, RunConfig, SourceKind};
pub use error::{Error, Result, SourceError};
pub use parallel::multiply_par;
pub use report::{MatrixReport, OutputFormat};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{load_matrix, EmbeddedSource, FileSource, TextSource};
