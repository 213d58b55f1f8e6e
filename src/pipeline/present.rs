//! The contract handed to renderers: derived rows plus a title and a
//! column-to-semantic-type mapping so chart code can pick axis formats.

use serde::Serialize;

use crate::pipeline::rank::Metric;
use crate::pipeline::types::{
    EnrichedNeighborhoodRow, NeighborhoodMeansRow, PricePoint, PriceRentPoint,
    YearNeighborhoodRow, YearlyPriceRentRow, YearlyUnitsRow,
};

/// Semantic type of a view column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Year,
    Neighborhood,
    UsdPerSquareFoot,
    HousingUnits,
    UsdMonthly,
    Latitude,
    Longitude,
}

/// Name and semantic type of one serialized row field.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

/// A derived dataset ready for rendering.
#[derive(Debug, Serialize)]
pub struct View<T> {
    pub title: String,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<T>,
}

fn col(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { name, kind }
}

pub fn housing_units_per_year_view(rows: Vec<YearlyUnitsRow>) -> View<YearlyUnitsRow> {
    View {
        title: "Housing Units in San Francisco from 2010 to 2016".to_string(),
        columns: vec![
            col("year", ColumnKind::Year),
            col("housing_units", ColumnKind::HousingUnits),
        ],
        rows,
    }
}

pub fn yearly_price_rent_view(rows: Vec<YearlyPriceRentRow>) -> View<YearlyPriceRentRow> {
    View {
        title: "Average Sale Price per Square Foot and Gross Rent by Year".to_string(),
        columns: vec![
            col("year", ColumnKind::Year),
            col("sale_price_sqr_foot", ColumnKind::UsdPerSquareFoot),
            col("gross_rent", ColumnKind::UsdMonthly),
        ],
        rows,
    }
}

pub fn neighborhood_map_view(rows: Vec<EnrichedNeighborhoodRow>) -> View<EnrichedNeighborhoodRow> {
    View {
        title: "Average Sale Price per Square Foot and Gross Rent in San Francisco".to_string(),
        columns: vec![
            col("neighborhood", ColumnKind::Neighborhood),
            col("sale_price_sqr_foot", ColumnKind::UsdPerSquareFoot),
            col("housing_units", ColumnKind::HousingUnits),
            col("gross_rent", ColumnKind::UsdMonthly),
            col("lat", ColumnKind::Latitude),
            col("lon", ColumnKind::Longitude),
        ],
        rows,
    }
}

pub fn top_neighborhoods_view(
    rows: Vec<NeighborhoodMeansRow>,
    metric: Metric,
    n: usize,
) -> View<NeighborhoodMeansRow> {
    View {
        title: format!("Top {n} San Francisco Neighborhoods by {}", metric.label()),
        columns: vec![
            col("neighborhood", ColumnKind::Neighborhood),
            col("sale_price_sqr_foot", ColumnKind::UsdPerSquareFoot),
            col("housing_units", ColumnKind::HousingUnits),
            col("gross_rent", ColumnKind::UsdMonthly),
        ],
        rows,
    }
}

pub fn top_neighborhoods_per_year_view(
    rows: Vec<YearNeighborhoodRow>,
    n: usize,
) -> View<YearNeighborhoodRow> {
    View {
        title: format!("Yearly Sale Price and Gross Rent for the Top {n} Neighborhoods"),
        columns: year_neighborhood_columns(),
        rows,
    }
}

pub fn price_series_view(rows: Vec<PricePoint>, neighborhood: &str) -> View<PricePoint> {
    View {
        title: format!("Average Sale Price per Square Foot in {neighborhood}"),
        columns: vec![
            col("year", ColumnKind::Year),
            col("sale_price_sqr_foot", ColumnKind::UsdPerSquareFoot),
        ],
        rows,
    }
}

pub fn price_rent_series_view(rows: Vec<PriceRentPoint>, neighborhood: &str) -> View<PriceRentPoint> {
    View {
        title: format!("Sale Price per Square Foot and Gross Rent in {neighborhood}"),
        columns: vec![
            col("year", ColumnKind::Year),
            col("sale_price_sqr_foot", ColumnKind::UsdPerSquareFoot),
            col("gross_rent", ColumnKind::UsdMonthly),
        ],
        rows,
    }
}

fn year_neighborhood_columns() -> Vec<ColumnSpec> {
    vec![
        col("year", ColumnKind::Year),
        col("neighborhood", ColumnKind::Neighborhood),
        col("sale_price_sqr_foot", ColumnKind::UsdPerSquareFoot),
        col("housing_units", ColumnKind::HousingUnits),
        col("gross_rent", ColumnKind::UsdMonthly),
    ]
}
