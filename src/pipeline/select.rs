//! Single-neighborhood series selection.
//!
//! These back the two interactive neighborhood selectors. They are pure and
//! side-effect free; an unknown neighborhood yields an empty series and the
//! renderer decides how to present that.

use crate::pipeline::types::{PricePoint, PriceRentPoint, YearNeighborhoodRow};

/// Rows for `neighborhood` only, year ascending.
pub fn neighborhood_series(
    rows: &[YearNeighborhoodRow],
    neighborhood: &str,
) -> Vec<YearNeighborhoodRow> {
    let mut series: Vec<YearNeighborhoodRow> = rows
        .iter()
        .filter(|r| r.neighborhood == neighborhood)
        .cloned()
        .collect();
    series.sort_by_key(|r| r.year);
    series
}

/// Sale price over time for one neighborhood.
pub fn price_series(rows: &[YearNeighborhoodRow], neighborhood: &str) -> Vec<PricePoint> {
    neighborhood_series(rows, neighborhood)
        .into_iter()
        .map(|r| PricePoint {
            year: r.year,
            sale_price_sqr_foot: r.sale_price_sqr_foot,
        })
        .collect()
}

/// Sale price and gross rent over time for one neighborhood.
pub fn price_rent_series(rows: &[YearNeighborhoodRow], neighborhood: &str) -> Vec<PriceRentPoint> {
    neighborhood_series(rows, neighborhood)
        .into_iter()
        .map(|r| PriceRentPoint {
            year: r.year,
            sale_price_sqr_foot: r.sale_price_sqr_foot,
            gross_rent: r.gross_rent,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_row(year: i32, neighborhood: &str, price: f64, rent: i64) -> YearNeighborhoodRow {
        YearNeighborhoodRow {
            year,
            neighborhood: neighborhood.to_string(),
            sale_price_sqr_foot: price,
            housing_units: 374507,
            gross_rent: rent,
        }
    }

    #[test]
    fn test_unknown_neighborhood_yields_empty_series() {
        let rows = vec![year_row(2010, "Marina", 500.0, 1239)];

        assert!(neighborhood_series(&rows, "Outer Sunset").is_empty());
        assert!(price_series(&rows, "Outer Sunset").is_empty());
        assert!(price_rent_series(&rows, "Outer Sunset").is_empty());
    }

    #[test]
    fn test_series_sorted_by_year() {
        let rows = vec![
            year_row(2012, "Marina", 540.0, 2324),
            year_row(2010, "Marina", 500.0, 1239),
            year_row(2011, "Bayview", 209.61, 1530),
            year_row(2011, "Marina", 520.0, 1530),
        ];

        let series = neighborhood_series(&rows, "Marina");
        let years: Vec<i32> = series.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2010, 2011, 2012]);
    }

    #[test]
    fn test_price_series_projects_price_only() {
        let rows = vec![year_row(2010, "Marina", 500.0, 1239)];

        let series = price_series(&rows, "Marina");
        assert_eq!(
            series,
            vec![PricePoint { year: 2010, sale_price_sqr_foot: 500.0 }]
        );
    }

    #[test]
    fn test_price_rent_series_carries_both_metrics() {
        let rows = vec![
            year_row(2010, "Marina", 500.0, 1239),
            year_row(2011, "Marina", 520.0, 1530),
        ];

        let series = price_rent_series(&rows, "Marina");
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].gross_rent, 1530);
        assert_eq!(series[1].sale_price_sqr_foot, 520.0);
    }

    #[test]
    fn test_repeated_selection_is_idempotent() {
        let rows = vec![
            year_row(2011, "Marina", 520.0, 1530),
            year_row(2010, "Marina", 500.0, 1239),
        ];

        assert_eq!(
            neighborhood_series(&rows, "Marina"),
            neighborhood_series(&rows, "Marina")
        );
    }
}
