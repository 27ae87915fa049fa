use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use spmat::output::default_output_dir;
use spmat::report::{render_matrix, render_results};
use spmat::source::SAMPLE_DIRECTORY;
use spmat::{
    load_matrix, pipeline, EmbeddedSource, FileSource, OperationChoice, OutputFormat, RunConfig,
    SourceKind, TextSource,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "spmat - add, subtract and multiply sparse integer matrices described as text")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine two matrices
    Compute {
        /// First matrix identifier
        first: String,

        /// Second matrix identifier
        second: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Operation to perform
        #[arg(long, value_enum, default_value_t = OperationChoice::All)]
        op: OperationChoice,

        /// Output rendering
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Save results to this directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Save results to `output/` next to the first input file
        #[arg(long, conflicts_with = "output_dir")]
        save: bool,

        /// Multiply rows in parallel
        #[arg(long)]
        parallel: bool,

        /// Drop explicitly stored zeros from results
        #[arg(long)]
        compact: bool,
    },
    /// Parse one matrix and print it
    Show {
        /// Matrix identifier
        identifier: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Output rendering
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the bundled sample matrices
    Samples,
}

#[derive(Args)]
struct SourceArgs {
    /// Where matrix text is loaded from
    #[arg(long, value_enum, default_value_t = SourceKind::File)]
    source: SourceKind,

    /// Base directory (file) or base URL (http)
    #[arg(long, default_value = ".")]
    base: String,
}

impl SourceArgs {
    fn open(&self) -> spmat::Result<Box<dyn TextSource>> {
        debug!(source = ?self.source, base = %self.base, "opening source");
        let source: Box<dyn TextSource> = match self.source {
            SourceKind::File => Box::new(FileSource::new(&self.base)),
            SourceKind::Embedded => Box::new(EmbeddedSource::with_samples()),
            #[cfg(feature = "http")]
            SourceKind::Http => Box::new(spmat::HttpSource::new(&self.base).map_err(|source| {
                spmat::SourceError::Io {
                    path: PathBuf::from(&self.base),
                    source,
                }
            })?),
            #[cfg(not(feature = "http"))]
            SourceKind::Http => {
                return Err(spmat::SourceError::NotFound(format!(
                    "{} (built without the http feature)",
                    self.base
                ))
                .into())
            }
        };
        Ok(source)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> spmat::Result<()> {
    match command {
        Commands::Compute {
            first,
            second,
            source,
            op,
            format,
            output_dir,
            save,
            parallel,
            compact,
        } => {
            let text_source = source.open()?;
            let a = load_matrix(&*text_source, &first)?;
            let b = load_matrix(&*text_source, &second)?;

            let mut config = RunConfig::default()
                .with_operation(op)
                .with_format(format)
                .with_parallel(parallel)
                .with_compact(compact);
            if let Some(dir) = output_dir {
                config = config.with_output_dir(dir);
            } else if save {
                let first_path = match source.source {
                    SourceKind::File => PathBuf::from(&source.base).join(&first),
                    _ => PathBuf::from(&first),
                };
                config = config.with_output_dir(default_output_dir(first_path));
            }

            let outcomes = pipeline::run(&a, &b, &config)?;
            let rendered = render_results(
                outcomes.iter().map(|o| (o.operation, &o.result)),
                config.format,
            )?;
            println!("{rendered}");

            for outcome in &outcomes {
                if let Some(path) = &outcome.saved_to {
                    println!("Operation completed. Result saved to {}", path.display());
                }
            }
        }
        Commands::Show {
            identifier,
            source,
            format,
        } => {
            let text_source = source.open()?;
            let matrix = load_matrix(&*text_source, &identifier)?;
            println!("{}", render_matrix(&matrix, format)?);
        }
        Commands::Samples => {
            let samples = EmbeddedSource::with_samples();
            for identifier in samples.identifiers() {
                println!("{identifier}");
            }
            debug!(directory = SAMPLE_DIRECTORY, "listed samples");
        }
    }

    Ok(())
}
