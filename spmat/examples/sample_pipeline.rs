//! Load the bundled sample matrices and print their sum, difference and
//! product as JSON reports.
//!
//! Run with: cargo run --example sample_pipeline

use spmat::report::render_results;
use spmat::source::{join_identifier, SAMPLE_DIRECTORY};
use spmat::{load_matrix, pipeline, EmbeddedSource, OutputFormat, RunConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let source = EmbeddedSource::with_samples();
    let matrix_a = load_matrix(&source, &join_identifier(SAMPLE_DIRECTORY, "input1.txt"))?;
    let matrix_b = load_matrix(&source, &join_identifier(SAMPLE_DIRECTORY, "input2.txt"))?;

    let config = RunConfig::default().with_format(OutputFormat::Json);
    let outcomes = pipeline::run(&matrix_a, &matrix_b, &config)?;

    let rendered = render_results(
        outcomes.iter().map(|o| (o.operation, &o.result)),
        config.format,
    )?;
    println!("{rendered}");

    for outcome in &outcomes {
        println!("{} took {:.2?}", outcome.operation, outcome.elapsed);
    }

    Ok(())
}
