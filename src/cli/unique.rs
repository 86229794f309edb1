use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{open_output, read_input, InputArgs, OutputFormat};
use crate::core::record::Record;
use crate::core::types::Source;
use crate::matching::uniqueness::{unique_exact, unique_quasi_identifiers};
use crate::parsing::delimited::write_all_fields;

#[derive(Args)]
pub struct UniqueArgs {
    /// Input file, or '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Row layout of the input
    #[arg(short, long, value_enum)]
    pub source: Source,

    /// Compare whole rows instead of quasi-identifiers
    #[arg(long)]
    pub exact: bool,

    /// Write results here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub input_args: InputArgs,
}

/// Execute unique subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or the output cannot be
/// written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: UniqueArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.input_args.load_config()?;
    let options = match args.source {
        Source::Poll => &config.poll,
        Source::Disease => &config.disease,
    };
    let records = read_input(&args.input, args.source, options, config.duplicates)?;

    let unique: Vec<Record> = if args.exact {
        unique_exact(&records)
    } else {
        unique_quasi_identifiers(&records)
    }
    .into_iter()
    .cloned()
    .collect();

    if verbose {
        eprintln!(
            "{} of {} {} records are unique",
            unique.len(),
            records.len(),
            args.source
        );
    }

    let mut out = open_output(args.output.as_deref())?;
    match format {
        OutputFormat::Csv => write_all_fields(&mut out, &unique, ',')?,
        OutputFormat::Tsv => write_all_fields(&mut out, &unique, '\t')?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &unique)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for record in &unique {
                writeln!(out, "{record}")?;
            }
        }
    }
    out.flush()?;

    Ok(())
}
