//! Builds credit ledgers from text, files, standard input and tuples.
//!
//! Text input holds one record per line, `[name] score grade`, split on
//! whitespace. The first malformed record aborts the whole parse.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::credit::Credit;
use crate::error::LedgerError;

/// One element of an in-memory credit tuple.
///
/// Deserializes untagged, so the JSON array `["Math", 90, 4]` reads as
/// `[Text, Number, Number]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Number(f64),
    Text(String),
}

impl Field {
    fn to_name(&self) -> String {
        match self {
            Field::Text(s) => s.clone(),
            Field::Number(n) => n.to_string(),
        }
    }

    fn to_number(&self, record: usize) -> Result<f64, LedgerError> {
        match self {
            Field::Number(n) => Ok(*n),
            Field::Text(s) => parse_number(s, record),
        }
    }
}

impl From<f64> for Field {
    fn from(n: f64) -> Self {
        Field::Number(n)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

fn parse_number(token: &str, record: usize) -> Result<f64, LedgerError> {
    token
        .parse::<f64>()
        .map_err(|source| LedgerError::NumericFormat {
            record,
            token: token.to_string(),
            source,
        })
}

/// Parses one whitespace-separated line. `record` is 1-based and only used
/// for error reporting.
fn parse_line(line: &str, record: usize) -> Result<Credit, LedgerError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [score, grade] => Ok(Credit::unnamed(
            parse_number(score, record)?,
            parse_number(grade, record)?,
        )),
        [name, score, grade] => Ok(Credit::new(
            *name,
            parse_number(score, record)?,
            parse_number(grade, record)?,
        )),
        _ => Err(LedgerError::Format {
            record,
            fields: tokens.len(),
        }),
    }
}

/// Parses text lines into credits, preserving input order.
///
/// # Errors
///
/// Returns [`LedgerError::Format`] for a line without 2 or 3 tokens and
/// [`LedgerError::NumericFormat`] for a non-numeric score or grade.
pub fn credits_from_lines<I, S>(lines: I) -> Result<Vec<Credit>, LedgerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let credits = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| parse_line(line.as_ref(), i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = credits.len(), "Parsed credit lines");
    Ok(credits)
}

/// Reads every line from `reader` and parses them as credits.
///
/// `origin` names the stream in I/O errors.
fn read_credits<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Credit>, LedgerError> {
    let lines = reader
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .map_err(|source| LedgerError::Io {
            path: origin.to_path_buf(),
            source,
        })?;

    credits_from_lines(lines)
}

/// Parses credits from any buffered reader.
pub fn credits_from_reader<R: BufRead>(reader: R) -> Result<Vec<Credit>, LedgerError> {
    read_credits(reader, Path::new("<reader>"))
}

/// Opens the file at `path` and parses its lines as credits.
///
/// The file is closed before this returns, on success and on error.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn credits_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Credit>, LedgerError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LedgerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_credits(BufReader::new(file), path)
}

/// Parses credits from the process's standard input.
#[tracing::instrument]
pub fn credits_from_stdin() -> Result<Vec<Credit>, LedgerError> {
    let stdin = io::stdin();
    read_credits(stdin.lock(), Path::new("<stdin>"))
}

/// Builds credits from 2- or 3-element tuples.
///
/// A 2-element row is `(score, grade)` and gets the placeholder name; a
/// 3-element row is `(name, score, grade)`.
///
/// # Errors
///
/// Returns [`LedgerError::Format`] for rows of any other length.
pub fn credits_from_tuples<I, R>(rows: I) -> Result<Vec<Credit>, LedgerError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[Field]>,
{
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let record = i + 1;
            match row.as_ref() {
                [score, grade] => Ok(Credit::unnamed(
                    score.to_number(record)?,
                    grade.to_number(record)?,
                )),
                [name, score, grade] => Ok(Credit::new(
                    name.to_name(),
                    score.to_number(record)?,
                    grade.to_number(record)?,
                )),
                other => Err(LedgerError::Format {
                    record,
                    fields: other.len(),
                }),
            }
        })
        .collect()
}

/// Builds credits from a JSON array of tuples, e.g. `[["Math", 90, 4], [80, 3]]`.
pub fn credits_from_json(json: &str) -> Result<Vec<Credit>, LedgerError> {
    let rows: Vec<Vec<Field>> = serde_json::from_str(json)?;
    credits_from_tuples(rows)
}
