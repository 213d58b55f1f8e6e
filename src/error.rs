//! Load-time error types for the input tables.
//!
//! Schema violations are fatal and abort startup. The derivation pipeline
//! itself is pure and infallible once both tables are in memory.

use std::path::PathBuf;
use thiserror::Error;

/// A fatal schema violation detected while loading an input table.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The table file could not be opened or read.
    #[error("failed to read {table} table from {path}: {source}")]
    Io {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row could not be parsed.
    #[error("failed to read headers of {table} table: {source}")]
    Headers {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("{table} table is missing required column `{column}`")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    /// A row failed to deserialize, e.g. non-numeric data in a numeric
    /// column. `line` is 1-based and counts the header row.
    #[error("{table} table, line {line}: {source}")]
    InvalidRow {
        table: &'static str,
        line: u64,
        #[source]
        source: csv::Error,
    },
}
