//! CLI entry point for the ngpa GPA calculator.
//!
//! Provides subcommands for computing the GPA of a transcript, merging two
//! transcripts, and excluding courses before recomputing.

mod telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ngpa::output::{GpaReport, append_record, print_json, print_pretty};
use ngpa::{
    Credit, credits_from_json, credits_from_path, credits_from_stdin, exclude_from, merge_gpa,
};
use std::io;
use tracing::info;

/// Source argument that selects standard input.
const STDIN_SOURCE: &str = "-";

#[derive(Parser)]
#[command(name = "ngpa")]
#[command(about = "Compute a credit-weighted GPA from course scores", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the GPA of a transcript file or standard input
    Gpa {
        /// Transcript file with `[name] score grade` lines; `-` or absent reads stdin
        #[arg(value_name = "FILE")]
        source: Option<String>,

        /// Read the source as a JSON array of `[name, score, grade]` tuples
        #[arg(long, default_value_t = false)]
        json: bool,

        /// CSV file to append the report to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compute the GPA of two transcripts taken together
    Merge {
        #[arg(value_name = "FIRST")]
        first: String,

        #[arg(value_name = "SECOND")]
        second: String,

        /// CSV file to append the report to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compute the GPA of a transcript without some courses
    Exclude {
        /// Transcript file; `-` reads stdin
        #[arg(value_name = "FILE")]
        source: String,

        /// Transcript whose course names are excluded
        #[arg(short = 'f', long)]
        exclude_file: Option<String>,

        /// Course name to exclude (repeatable)
        #[arg(short, long = "name", value_name = "NAME")]
        names: Vec<String>,

        /// CSV file to append the report to
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = telemetry::init_logging();

    let cli = Cli::parse();

    let report = match cli.command {
        Commands::Gpa {
            source,
            json,
            output,
        } => {
            let source = source.unwrap_or_else(|| STDIN_SOURCE.to_string());
            let credits = if json {
                load_json(&source)?
            } else {
                load(&source)?
            };
            let report = GpaReport::from_credits(&source, &credits)
                .with_context(|| format!("cannot compute GPA of {source}"))?;
            finish(report, output.as_deref())?
        }
        Commands::Merge {
            first,
            second,
            output,
        } => {
            let first_credits = load(&first)?;
            let second_credits = load(&second)?;
            let value = merge_gpa(&first_credits, &second_credits)
                .with_context(|| format!("cannot compute merged GPA of {first} and {second}"))?;

            let all: Vec<Credit> = first_credits.into_iter().chain(second_credits).collect();
            let report = GpaReport::with_gpa(&format!("{first}+{second}"), &all, value);
            finish(report, output.as_deref())?
        }
        Commands::Exclude {
            source,
            exclude_file,
            names,
            output,
        } => {
            let credits = load(&source)?;

            let mut exclude = match &exclude_file {
                Some(path) => load(path)?,
                None => Vec::new(),
            };
            exclude.extend(names.into_iter().map(|name| Credit::new(name, 0.0, 0.0)));
            info!(excluded = exclude.len(), "Excluding courses");

            let value = exclude_from(&credits, &exclude)
                .with_context(|| format!("cannot compute GPA of {source} after exclusion"))?;

            let kept: Vec<Credit> = credits
                .into_iter()
                .filter(|c| !exclude.contains(c))
                .collect();
            let report = GpaReport::with_gpa(&source, &kept, value);
            finish(report, output.as_deref())?
        }
    };

    println!("{:.4}", report.gpa);
    Ok(())
}

/// Loads a text transcript from a file path, or from stdin for `-`.
#[tracing::instrument]
fn load(source: &str) -> Result<Vec<Credit>> {
    let credits = if source == STDIN_SOURCE {
        credits_from_stdin()?
    } else {
        credits_from_path(source)?
    };
    info!(courses = credits.len(), "Transcript loaded");
    Ok(credits)
}

/// Loads a JSON tuple transcript from a file path, or from stdin for `-`.
#[tracing::instrument]
fn load_json(source: &str) -> Result<Vec<Credit>> {
    let json = if source == STDIN_SOURCE {
        io::read_to_string(io::stdin()).context("cannot read stdin")?
    } else {
        std::fs::read_to_string(source).with_context(|| format!("cannot read {source}"))?
    };
    let credits = credits_from_json(&json).with_context(|| format!("cannot parse {source}"))?;
    info!(courses = credits.len(), "Transcript loaded");
    Ok(credits)
}

/// Logs the report and appends it to `output` when given.
fn finish(report: GpaReport, output: Option<&str>) -> Result<GpaReport> {
    print_pretty(&report);
    print_json(&report)?;

    if let Some(path) = output {
        append_record(path, &report).with_context(|| format!("cannot write report to {path}"))?;
    }

    Ok(report)
}
