//! Grouping and averaging of the raw census records.
//!
//! Each function here recomputes its view directly from the raw table.
//! The two yearly views are deliberately independent derivations, never
//! produced from one another. Output rows follow ascending key order:
//! year first, then neighborhood where it is part of the key.

use std::collections::BTreeMap;

use crate::pipeline::types::{
    NeighborhoodMeansRow, RawRecord, YearNeighborhoodRow, YearlyPriceRentRow, YearlyUnitsRow,
};
use crate::pipeline::utility::{mean, round2, whole};

#[derive(Default)]
struct Columns {
    prices: Vec<f64>,
    units: Vec<f64>,
    rents: Vec<f64>,
}

struct Means {
    sale_price_sqr_foot: f64,
    housing_units: f64,
    gross_rent: f64,
}

/// Groups records by `key` and averages each numeric column within the
/// group. The `BTreeMap` fixes ascending key order in the output.
fn group_means<K, F>(records: &[RawRecord], key: F) -> Vec<(K, Means)>
where
    K: Ord,
    F: Fn(&RawRecord) -> K,
{
    let mut groups: BTreeMap<K, Columns> = BTreeMap::new();

    for record in records {
        let columns = groups.entry(key(record)).or_default();
        columns.prices.push(record.sale_price_sqr_foot);
        columns.units.push(record.housing_units);
        columns.rents.push(record.gross_rent);
    }

    groups
        .into_iter()
        .map(|(k, columns)| {
            (
                k,
                Means {
                    sale_price_sqr_foot: mean(&columns.prices),
                    housing_units: mean(&columns.units),
                    gross_rent: mean(&columns.rents),
                },
            )
        })
        .collect()
}

/// Mean housing units per year, as whole units. Feeds the yearly bar chart.
pub fn yearly_housing_units(records: &[RawRecord]) -> Vec<YearlyUnitsRow> {
    group_means(records, |r| r.year)
        .into_iter()
        .map(|(year, m)| YearlyUnitsRow {
            year,
            housing_units: whole(m.housing_units),
        })
        .collect()
}

/// Mean sale price and gross rent per year. Feeds the two trend lines.
pub fn yearly_price_rent(records: &[RawRecord]) -> Vec<YearlyPriceRentRow> {
    group_means(records, |r| r.year)
        .into_iter()
        .map(|(year, m)| YearlyPriceRentRow {
            year,
            sale_price_sqr_foot: round2(m.sale_price_sqr_foot),
            gross_rent: whole(m.gross_rent),
        })
        .collect()
}

/// Per-neighborhood means across all years, alphabetical.
pub fn neighborhood_means(records: &[RawRecord]) -> Vec<NeighborhoodMeansRow> {
    group_means(records, |r| r.neighborhood.clone())
        .into_iter()
        .map(|(neighborhood, m)| NeighborhoodMeansRow {
            neighborhood,
            sale_price_sqr_foot: round2(m.sale_price_sqr_foot),
            housing_units: round2(m.housing_units),
            gross_rent: round2(m.gross_rent),
        })
        .collect()
}

/// Per-(year, neighborhood) means, chronological then alphabetical.
pub fn year_neighborhood_means(records: &[RawRecord]) -> Vec<YearNeighborhoodRow> {
    group_means(records, |r| (r.year, r.neighborhood.clone()))
        .into_iter()
        .map(|((year, neighborhood), m)| YearNeighborhoodRow {
            year,
            neighborhood,
            sale_price_sqr_foot: round2(m.sale_price_sqr_foot),
            housing_units: whole(m.housing_units),
            gross_rent: whole(m.gross_rent),
        })
        .collect()
}
