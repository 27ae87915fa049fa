//! Saving results to disk
//!
//! Results are written as `<output dir>/<operation>.txt` in the text
//! format, so they can be loaded again with a [`crate::source::FileSource`].

use std::fs;
use std::path::{Path, PathBuf};

use spmat_core::{DokMatrix, Operation};
use tracing::info;

use crate::error::{Error, Result};
use crate::report::{render_matrix, OutputFormat};

/// Name of the directory results go to when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// File name a result is saved under
pub fn result_file_name(operation: Operation, format: OutputFormat) -> String {
    let stem = match operation {
        Operation::Add => "addition",
        Operation::Subtract => "subtraction",
        Operation::Multiply => "multiplication",
    };
    match format {
        OutputFormat::Text => format!("{stem}.txt"),
        OutputFormat::Json => format!("{stem}.json"),
    }
}

/// Default output directory: `output/` next to the first input file
pub fn default_output_dir<P: AsRef<Path>>(first_input: P) -> PathBuf {
    first_input
        .as_ref()
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(DEFAULT_OUTPUT_DIR)
}

/// Write a result matrix, creating the output directory when missing
///
/// Returns the path written.
pub fn save_result(
    output_dir: &Path,
    operation: Operation,
    matrix: &DokMatrix,
    format: OutputFormat,
) -> Result<PathBuf> {
    let path = output_dir.join(result_file_name(operation, format));
    let output_error = |source| Error::Output {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(output_dir).map_err(output_error)?;

    let mut contents = render_matrix(matrix, format)?;
    contents.push('\n');
    fs::write(&path, contents).map_err(output_error)?;

    info!(path = %path.display(), %operation, "saved result");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{load_matrix, FileSource};

    #[test]
    fn test_result_file_names() {
        assert_eq!(result_file_name(Operation::Add, OutputFormat::Text), "addition.txt");
        assert_eq!(
            result_file_name(Operation::Subtract, OutputFormat::Text),
            "subtraction.txt"
        );
        assert_eq!(
            result_file_name(Operation::Multiply, OutputFormat::Json),
            "multiplication.json"
        );
    }

    #[test]
    fn test_default_output_dir() {
        assert_eq!(
            default_output_dir("data/in/a.txt"),
            PathBuf::from("data/in/output")
        );
        assert_eq!(default_output_dir("a.txt"), PathBuf::from("output"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = std::env::temp_dir()
            .join(format!("spmat-output-{}", std::process::id()))
            .join("nested");
        let matrix = DokMatrix::from_entries(4, 2, [(3, 1, -6), (0, 0, 2)]).unwrap();

        let path = save_result(&dir, Operation::Multiply, &matrix, OutputFormat::Text).unwrap();
        assert_eq!(path, dir.join("multiplication.txt"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "rows=4\ncols=2\n(0,0,2)\n(3,1,-6)\n"
        );

        let reloaded = load_matrix(&FileSource::new(&dir), "multiplication.txt").unwrap();
        assert_eq!(reloaded, matrix);

        fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }
}
