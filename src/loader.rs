//! CSV loading and schema validation for the two input tables.
//!
//! Schema checks happen here and only here: required columns must be present
//! and numeric columns must parse. Anything past the loader is trusted by
//! the pipeline.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::SchemaError;
use crate::pipeline::types::{CoordinateRecord, RawRecord};

const RECORD_COLUMNS: &[&str] = &[
    "year",
    "neighborhood",
    "sale_price_sqr_foot",
    "housing_units",
    "gross_rent",
];

// Coordinate headers are capitalized in the source file.
const COORDINATE_COLUMNS: &[&str] = &["Neighborhood", "Lat", "Lon"];

/// Loads the census records table. `year` need not be unique; multiple
/// neighborhoods share a year.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, SchemaError> {
    load_table("records", path, RECORD_COLUMNS)
}

/// Loads the neighborhood coordinates table, keyed by unique neighborhood.
pub fn load_coordinates(path: &Path) -> Result<Vec<CoordinateRecord>, SchemaError> {
    load_table("coordinates", path, COORDINATE_COLUMNS)
}

fn load_table<T: DeserializeOwned>(
    table: &'static str,
    path: &Path,
    required: &'static [&'static str],
) -> Result<Vec<T>, SchemaError> {
    let file = File::open(path).map_err(|source| SchemaError::Io {
        table,
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = csv::Reader::from_reader(file);

    let headers = rdr
        .headers()
        .map_err(|source| SchemaError::Headers { table, source })?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(SchemaError::MissingColumn { table, column });
        }
    }

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        // Line numbers count the header row, so data starts at line 2.
        let row: T = result.map_err(|source| SchemaError::InvalidRow {
            table,
            line: i as u64 + 2,
            source,
        })?;
        rows.push(row);
    }

    info!(table, rows = rows.len(), path = %path.display(), "input table loaded");
    Ok(rows)
}
