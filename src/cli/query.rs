use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{ensure_single_stdin, open_output, read_input, InputArgs, OutputFormat};
use crate::core::types::Source;
use crate::matching::query::{resolve_queries, QueryOutcome, QueryResult};

#[derive(Args)]
pub struct QueryArgs {
    /// Poll file: name, telephone, DD-MM-YYYY, gender, postal code
    #[arg(required = true)]
    pub poll: PathBuf,

    /// Disease file: *, *, *, birth year, gender, postal code, disease
    #[arg(required = true)]
    pub disease: PathBuf,

    /// Query file, in the poll layout
    #[arg(required = true)]
    pub queries: PathBuf,

    /// Write results here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute query subcommand
///
/// # Errors
///
/// Returns an error if any input cannot be parsed or the output cannot be
/// written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: QueryArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    ensure_single_stdin(&[
        args.poll.as_path(),
        args.disease.as_path(),
        args.queries.as_path(),
    ])?;
    let config = args.input.load_config()?;

    let poll = read_input(&args.poll, Source::Poll, &config.poll, config.duplicates)?;
    let disease = read_input(
        &args.disease,
        Source::Disease,
        &config.disease,
        config.duplicates,
    )?;
    let queries = read_input(
        &args.queries,
        Source::Poll,
        &config.queries,
        config.duplicates,
    )?;

    let results = resolve_queries(&queries, &poll, &disease);

    if verbose {
        let identified = results
            .iter()
            .filter(|r| matches!(r.outcome, QueryOutcome::Identified { .. }))
            .count();
        eprintln!("{identified} of {} queries identified", results.len());
    }

    let mut out = open_output(args.output.as_deref())?;
    match format {
        OutputFormat::Csv => print_delimited_results(&mut out, &results, b',')?,
        OutputFormat::Tsv => print_delimited_results(&mut out, &results, b'\t')?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &results)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for result in &results {
                writeln!(
                    out,
                    "{} ({}): {}",
                    result.query.name.as_deref().unwrap_or("?"),
                    result.query.telephone.as_deref().unwrap_or("?"),
                    result.outcome
                )?;
            }
        }
    }
    out.flush()?;

    Ok(())
}

/// Rows of `name, telephone, status, detail`; ambiguous candidates are
/// joined with `|`
fn print_delimited_results(
    out: &mut dyn Write,
    results: &[QueryResult],
    delimiter: u8,
) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_writer(out);

    for result in results {
        let (status, detail) = match &result.outcome {
            QueryOutcome::Identified { disease } => ("identified", disease.clone()),
            QueryOutcome::Ambiguous { candidates } => ("ambiguous", candidates.join("|")),
            QueryOutcome::Unmatched => ("unmatched", String::new()),
        };
        writer.write_record([
            result.query.name.as_deref().unwrap_or_default(),
            result.query.telephone.as_deref().unwrap_or_default(),
            status,
            detail.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
