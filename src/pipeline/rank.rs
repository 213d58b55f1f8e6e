//! Top-N neighborhood ranking and membership filtering.

use std::collections::HashSet;

use clap::ValueEnum;

use crate::pipeline::aggregate::{neighborhood_means, year_neighborhood_means};
use crate::pipeline::types::{NeighborhoodMeansRow, RawRecord, TopNeighborhoods, YearNeighborhoodRow};

/// How many neighborhoods the ranking keeps unless asked otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Ranking metric for the most-expensive-neighborhoods views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    #[default]
    SalePriceSqrFoot,
    HousingUnits,
    GrossRent,
}

impl Metric {
    fn of(self, row: &NeighborhoodMeansRow) -> f64 {
        match self {
            Metric::SalePriceSqrFoot => row.sale_price_sqr_foot,
            Metric::HousingUnits => row.housing_units,
            Metric::GrossRent => row.gross_rent,
        }
    }

    /// Axis label wording for titles.
    pub fn label(self) -> &'static str {
        match self {
            Metric::SalePriceSqrFoot => "Sale Price per Square Foot",
            Metric::HousingUnits => "Housing Units",
            Metric::GrossRent => "Gross Rent",
        }
    }
}

/// The `n` rows with the largest metric value, descending.
///
/// The sort is stable, so ties keep the order of the input table. When fewer
/// than `n` rows exist, all of them are returned.
pub fn top_n(aggregate: &[NeighborhoodMeansRow], metric: Metric, n: usize) -> Vec<NeighborhoodMeansRow> {
    let mut ranked = aggregate.to_vec();
    ranked.sort_by(|a, b| metric.of(b).total_cmp(&metric.of(a)));
    ranked.truncate(n);
    ranked
}

/// Keeps the rows whose neighborhood is a member of `members`, preserving
/// the chronological-then-alphabetical order of the input.
pub fn filter_by_membership(
    rows: &[YearNeighborhoodRow],
    members: &HashSet<String>,
) -> Vec<YearNeighborhoodRow> {
    rows.iter()
        .filter(|r| members.contains(&r.neighborhood))
        .cloned()
        .collect()
}

/// Ranks neighborhoods over the raw records and collects the full
/// year-by-year history of the winners.
pub fn top_neighborhoods(records: &[RawRecord], metric: Metric, n: usize) -> TopNeighborhoods {
    let ranking = top_n(&neighborhood_means(records), metric, n);
    let members: HashSet<String> = ranking.iter().map(|r| r.neighborhood.clone()).collect();
    let per_year = filter_by_membership(&year_neighborhood_means(records), &members);

    TopNeighborhoods { ranking, per_year }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn means(neighborhood: &str, price: f64) -> NeighborhoodMeansRow {
        NeighborhoodMeansRow {
            neighborhood: neighborhood.to_string(),
            sale_price_sqr_foot: price,
            housing_units: 374507.0,
            gross_rent: 1530.0,
        }
    }

    #[test]
    fn test_top_n_orders_descending() {
        let aggregate = vec![
            means("Bayview", 40.0),
            means("Marina", 50.0),
            means("Anza Vista", 30.0),
        ];

        let names: Vec<String> = top_n(&aggregate, Metric::SalePriceSqrFoot, 2)
            .into_iter()
            .map(|r| r.neighborhood)
            .collect();
        assert_eq!(names, vec!["Marina", "Bayview"]);
    }

    #[test]
    fn test_top_n_ties_keep_input_order() {
        let aggregate = vec![
            means("Alamo Square", 50.0),
            means("Bayview", 50.0),
            means("Cow Hollow", 40.0),
            means("Dogpatch", 30.0),
            means("Excelsior", 20.0),
        ];

        let names: Vec<String> = top_n(&aggregate, Metric::SalePriceSqrFoot, 3)
            .into_iter()
            .map(|r| r.neighborhood)
            .collect();
        assert_eq!(names, vec!["Alamo Square", "Bayview", "Cow Hollow"]);
    }

    #[test]
    fn test_top_n_short_table_returns_everything() {
        let aggregate = vec![means("Marina", 50.0), means("Bayview", 40.0)];

        assert_eq!(top_n(&aggregate, Metric::SalePriceSqrFoot, DEFAULT_TOP_N).len(), 2);
    }

    #[test]
    fn test_filter_by_membership_preserves_order() {
        let rows = vec![
            year_row(2010, "Alamo Square"),
            year_row(2010, "Bayview"),
            year_row(2011, "Alamo Square"),
            year_row(2011, "Bayview"),
        ];
        let members: HashSet<String> = ["Bayview".to_string()].into_iter().collect();

        let kept: Vec<(i32, String)> = filter_by_membership(&rows, &members)
            .into_iter()
            .map(|r| (r.year, r.neighborhood))
            .collect();
        assert_eq!(
            kept,
            vec![(2010, "Bayview".to_string()), (2011, "Bayview".to_string())]
        );
    }

    fn year_row(year: i32, neighborhood: &str) -> YearNeighborhoodRow {
        YearNeighborhoodRow {
            year,
            neighborhood: neighborhood.to_string(),
            sale_price_sqr_foot: 100.0,
            housing_units: 374507,
            gross_rent: 1530,
        }
    }
}
