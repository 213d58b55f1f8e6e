//! Row types for the raw tables and every derived view.

use serde::{Deserialize, Serialize};

/// A single observation deserialized from the census records CSV: one row
/// per (year, neighborhood). A neighborhood appears at most once per year;
/// duplicate rows are not deduplicated and skew the group means.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub year: i32,
    pub neighborhood: String,
    pub sale_price_sqr_foot: f64,
    /// Integral count, stored as float until display coercion.
    pub housing_units: f64,
    pub gross_rent: f64,
}

/// One row of the coordinates CSV. Headers are capitalized in the source
/// file.
#[derive(Debug, Clone, Deserialize)]
pub struct CoordinateRecord {
    #[serde(rename = "Neighborhood")]
    pub neighborhood: String,
    #[serde(rename = "Lat")]
    pub lat: f64,
    #[serde(rename = "Lon")]
    pub lon: f64,
}

/// Mean housing units per year, truncated to whole units for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyUnitsRow {
    pub year: i32,
    pub housing_units: i64,
}

/// Mean sale price and gross rent per year. Rent is reported in whole
/// dollars, sale price keeps its cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyPriceRentRow {
    pub year: i32,
    pub sale_price_sqr_foot: f64,
    pub gross_rent: i64,
}

/// Per-neighborhood means across all years, no integer coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborhoodMeansRow {
    pub neighborhood: String,
    pub sale_price_sqr_foot: f64,
    pub housing_units: f64,
    pub gross_rent: f64,
}

/// Per-(year, neighborhood) means. Identity over the source data when no
/// duplicate observations exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearNeighborhoodRow {
    pub year: i32,
    pub neighborhood: String,
    pub sale_price_sqr_foot: f64,
    pub housing_units: i64,
    pub gross_rent: i64,
}

/// A neighborhood's means joined with its map coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedNeighborhoodRow {
    pub neighborhood: String,
    pub sale_price_sqr_foot: f64,
    pub housing_units: f64,
    pub gross_rent: f64,
    pub lat: f64,
    pub lon: f64,
}

/// The highest-ranked neighborhoods by some metric, plus their full
/// year-by-year history for time-series and hierarchical views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopNeighborhoods {
    pub ranking: Vec<NeighborhoodMeansRow>,
    pub per_year: Vec<YearNeighborhoodRow>,
}

/// One point of a single-neighborhood sale price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub year: i32,
    pub sale_price_sqr_foot: f64,
}

/// One point of a single-neighborhood price and rent comparison series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRentPoint {
    pub year: i32,
    pub sale_price_sqr_foot: f64,
    pub gross_rent: i64,
}
