use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a credit ledger or computing its GPA.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A line or tuple did not have two or three fields.
    #[error("invalid format: record {record} has {fields} fields, expected 2 or 3")]
    Format { record: usize, fields: usize },

    /// A score or grade could not be read as a number.
    #[error("invalid number {token:?} in record {record}")]
    NumericFormat {
        record: usize,
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// The input file or stream could not be opened or read.
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json tuples: {0}")]
    Json(#[from] serde_json::Error),

    /// Total credit weight was zero, so no average exists.
    #[error("division by zero: total credit weight is 0")]
    DivisionByZero,
}
