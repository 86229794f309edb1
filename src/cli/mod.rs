//! Command-line interface for reident.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identify**: Link a poll file against a disease file and print the
//!   re-identified rows
//! - **unique**: Print the records of one file whose quasi-identifiers (or
//!   whole rows, with `--exact`) occur only once
//! - **query**: Report, for each person in a query file, whether they were
//!   identified with a disease
//!
//! ## Usage
//!
//! ```text
//! # Re-identify disease records
//! reident identify Poll-Data.csv Disease-Records.csv > Reidentified-Data.csv
//!
//! # JSON output with source row positions
//! reident identify Poll-Data.csv Disease-Records.csv --format json
//!
//! # Which poll entries are singled out by their quasi-identifiers?
//! reident unique Poll-Data.csv --source poll --format text
//!
//! # Look up specific people
//! reident query Poll-Data.csv Disease-Records.csv Queries.csv
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::{DuplicatePolicy, RunConfig, SourceOptions};
use crate::core::record::Record;
use crate::core::types::Source;
use crate::matching::uniqueness::exact_duplicates;
use crate::parsing::delimited;

pub mod identify;
pub mod query;
pub mod unique;

#[derive(Parser)]
#[command(name = "reident")]
#[command(version)]
#[command(about = "Re-identify anonymized disease records through unique quasi-identifiers")]
#[command(
    long_about = "reident links an anonymized disease dataset against an identified auxiliary dataset (poll or voter records) that shares birth year, gender and postal code.\n\nOnly records whose quasi-identifier tuple is unique within their own dataset are paired, so every reported identification is a 1-to-1 correspondence."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "csv")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-identify disease records against a poll dataset
    Identify(identify::IdentifyArgs),

    /// List the records of one file with unique quasi-identifiers
    Unique(unique::UniqueArgs),

    /// Resolve query people against a poll/disease linkage
    Query(query::QueryArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
    Text,
}

/// Input options shared by every subcommand
#[derive(clap::Args)]
pub struct InputArgs {
    /// JSON run configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Field delimiter for every input (overrides the config file)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Inputs start with a header row (overrides the config file)
    #[arg(long)]
    pub has_headers: bool,

    /// What to do about verbatim duplicate rows (overrides the config file)
    #[arg(long, value_enum)]
    pub duplicates: Option<DuplicatePolicy>,
}

impl InputArgs {
    /// Resolve the effective configuration: defaults, then file, then flags
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn load_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load_from_file(path)?,
            None => RunConfig::default(),
        };
        config.override_sources(self.delimiter, self.has_headers);
        if let Some(policy) = self.duplicates {
            config.duplicates = policy;
        }
        Ok(config)
    }
}

/// Reject invocations that try to read stdin more than once
///
/// # Errors
///
/// Returns an error if more than one path is `-`.
pub fn ensure_single_stdin(paths: &[&Path]) -> anyhow::Result<()> {
    if paths.iter().filter(|p| is_stdin(p)).count() > 1 {
        bail!("Only one input may be read from stdin ('-')");
    }
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read one input file (or stdin for `-`) and apply the duplicate policy
///
/// # Errors
///
/// Returns an error if the input is malformed, or if it holds verbatim
/// duplicate rows under `DuplicatePolicy::Reject`.
pub fn read_input(
    path: &Path,
    kind: Source,
    options: &SourceOptions,
    policy: DuplicatePolicy,
) -> anyhow::Result<Vec<Record>> {
    let records = if is_stdin(path) {
        delimited::parse_reader(io::stdin().lock(), kind, options)?
    } else {
        delimited::parse_file(path, kind, options)?
    };

    let duplicates = exact_duplicates(&records);
    if !duplicates.is_empty() {
        match policy {
            DuplicatePolicy::Allow => {}
            DuplicatePolicy::Warn => warn!(
                "{} {kind} rows in {} are verbatim duplicates of another row",
                duplicates.len(),
                path.display()
            ),
            DuplicatePolicy::Reject => bail!(
                "{} {kind} rows in {} are verbatim duplicates (first: {})",
                duplicates.len(),
                path.display(),
                duplicates[0]
            ),
        }
    }

    Ok(records)
}

/// Open the output sink: a file if given, stdout otherwise
///
/// # Errors
///
/// Returns an error if the output file cannot be created.
pub fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(io::BufWriter::new(std::fs::File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_single_stdin() {
        assert!(ensure_single_stdin(&[Path::new("-"), Path::new("a.csv")]).is_ok());
        assert!(ensure_single_stdin(&[Path::new("-"), Path::new("-")]).is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = InputArgs {
            config: None,
            delimiter: Some('\t'),
            has_headers: true,
            duplicates: Some(DuplicatePolicy::Reject),
        };
        let config = args.load_config().unwrap();
        assert_eq!(config.disease.delimiter, '\t');
        assert!(config.poll.has_headers);
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "reident",
            "identify",
            "poll.csv",
            "disease.csv",
            "--format",
            "json",
            "--duplicates",
            "reject",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Identify(_)));
    }
}
