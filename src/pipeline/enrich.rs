//! Joins neighborhood averages with their map coordinates.

use std::collections::HashMap;

use tracing::debug;

use crate::pipeline::types::{CoordinateRecord, EnrichedNeighborhoodRow, NeighborhoodMeansRow};

/// Inner join on neighborhood name, case-sensitive exact match.
///
/// The coordinates table is known to be incomplete; neighborhoods missing
/// from either side are dropped rather than reported. Matched rows keep the
/// order of `aggregate`.
pub fn enrich(
    aggregate: &[NeighborhoodMeansRow],
    coordinates: &[CoordinateRecord],
) -> Vec<EnrichedNeighborhoodRow> {
    let by_name: HashMap<&str, &CoordinateRecord> = coordinates
        .iter()
        .map(|c| (c.neighborhood.as_str(), c))
        .collect();

    let mut rows = Vec::with_capacity(aggregate.len());
    for agg in aggregate {
        if let Some(coord) = by_name.get(agg.neighborhood.as_str()) {
            rows.push(EnrichedNeighborhoodRow {
                neighborhood: agg.neighborhood.clone(),
                sale_price_sqr_foot: agg.sale_price_sqr_foot,
                housing_units: agg.housing_units,
                gross_rent: agg.gross_rent,
                lat: coord.lat,
                lon: coord.lon,
            });
        }
    }

    let dropped = aggregate.len() - rows.len();
    if dropped > 0 {
        debug!(dropped, "neighborhoods without coordinates left out of the map join");
    }

    rows
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

    fn coord(neighborhood: &str, lat: f64, lon: f64) -> CoordinateRecord {
        CoordinateRecord {
            neighborhood: neighborhood.to_string(),
            lat,
            lon,
        }
    }

    #[test]
    fn test_unmatched_aggregate_rows_are_dropped() {
        let aggregate = vec![means("Alamo Square", 325.86), means("Anza Vista", 178.17)];
        let coordinates = vec![coord("Alamo Square", 37.7764, -122.4346)];

        let rows = enrich(&aggregate, &coordinates);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].neighborhood, "Alamo Square");
        assert_eq!(rows[0].lat, 37.7764);
        assert_eq!(rows[0].lon, -122.4346);
    }

    #[test]
    fn test_unmatched_coordinates_are_ignored() {
        let aggregate = vec![means("Bayview", 189.86)];
        let coordinates = vec![
            coord("Bayview", 37.7347, -122.4012),
            coord("Outer Richmond", 37.7786, -122.4893),
        ];

        let rows = enrich(&aggregate, &coordinates);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].neighborhood, "Bayview");
    }

    #[test]
    fn test_matched_rows_keep_aggregate_order() {
        let aggregate = vec![
            means("Pacific Heights", 734.58),
            means("Bayview", 189.86),
            means("Alamo Square", 325.86),
        ];
        let coordinates = vec![
            coord("Alamo Square", 37.7764, -122.4346),
            coord("Bayview", 37.7347, -122.4012),
            coord("Pacific Heights", 37.7925, -122.4382),
        ];

        let names: Vec<String> = enrich(&aggregate, &coordinates)
            .into_iter()
            .map(|r| r.neighborhood)
            .collect();
        assert_eq!(names, vec!["Pacific Heights", "Bayview", "Alamo Square"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let aggregate = vec![means("bayview", 189.86)];
        let coordinates = vec![coord("Bayview", 37.7347, -122.4012)];

        assert!(enrich(&aggregate, &coordinates).is_empty());
    }
}
