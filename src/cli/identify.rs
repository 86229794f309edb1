use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{ensure_single_stdin, open_output, read_input, InputArgs, OutputFormat};
use crate::core::record::Record;
use crate::core::types::Source;
use crate::matching::engine::{LinkageEngine, MatchResult};
use crate::parsing::delimited::write_records;

#[derive(Args)]
pub struct IdentifyArgs {
    /// Poll file: name, telephone, DD-MM-YYYY, gender, postal code
    /// Use '-' for stdin
    #[arg(required = true)]
    pub poll: PathBuf,

    /// Disease file: *, *, *, birth year, gender, postal code, disease
    /// Use '-' for stdin
    #[arg(required = true)]
    pub disease: PathBuf,

    /// Write results here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute identify subcommand
///
/// # Errors
///
/// Returns an error if either input cannot be parsed, or if the output
/// cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    ensure_single_stdin(&[args.poll.as_path(), args.disease.as_path()])?;
    let config = args.input.load_config()?;

    let poll = read_input(&args.poll, Source::Poll, &config.poll, config.duplicates)?;
    let disease = read_input(
        &args.disease,
        Source::Disease,
        &config.disease,
        config.duplicates,
    )?;

    let matches = LinkageEngine::new(&poll, &disease).find_matches();

    if verbose {
        eprintln!(
            "Re-identified {} of {} disease records using {} poll records",
            matches.len(),
            disease.len(),
            poll.len()
        );
    }

    let mut out = open_output(args.output.as_deref())?;
    match format {
        OutputFormat::Csv => write_records(&mut out, &joined_records(&matches), ',')?,
        OutputFormat::Tsv => write_records(&mut out, &joined_records(&matches), '\t')?,
        OutputFormat::Json => print_json_results(&mut out, &matches)?,
        OutputFormat::Text => print_text_results(&mut out, &matches, &poll, &disease)?,
    }
    out.flush()?;

    Ok(())
}

fn joined_records(matches: &[MatchResult]) -> Vec<Record> {
    matches.iter().map(|m| m.record.clone()).collect()
}

fn print_json_results(out: &mut dyn Write, matches: &[MatchResult]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "count": matches.len(),
        "matches": matches,
    });
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

fn print_text_results(
    out: &mut dyn Write,
    matches: &[MatchResult],
    poll: &[Record],
    disease: &[Record],
) -> anyhow::Result<()> {
    if matches.is_empty() {
        writeln!(out, "No records could be re-identified.")?;
        return Ok(());
    }

    for (i, result) in matches.iter().enumerate() {
        if i > 0 {
            writeln!(out, "\n{}", "─".repeat(60))?;
        }

        let record = &result.record;
        writeln!(
            out,
            "\n#{} {} ({})",
            i + 1,
            record.name.as_deref().unwrap_or("?"),
            record.disease.as_deref().unwrap_or("?")
        )?;
        if let Some(key) = record.quasi_key() {
            writeln!(out, "   Quasi-identifiers: {key}")?;
        }
        // Row numbers are 1-based for user friendliness
        writeln!(
            out,
            "   Poll row {}: {}",
            result.poll_index + 1,
            poll[result.poll_index]
        )?;
        writeln!(
            out,
            "   Disease row {}: {}",
            result.disease_index + 1,
            disease[result.disease_index]
        )?;
    }

    Ok(())
}
