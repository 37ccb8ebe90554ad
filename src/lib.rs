pub mod credit;
pub mod error;
pub mod gpa;
pub mod output;
pub mod parser;

pub use credit::{Credit, PLACEHOLDER_NAME};
pub use error::LedgerError;
pub use gpa::{GPA_DIVISOR, exclude_from, gpa, merge_gpa};
pub use parser::{
    Field, credits_from_json, credits_from_lines, credits_from_path, credits_from_reader,
    credits_from_stdin, credits_from_tuples,
};
