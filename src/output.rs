//! Output formatting and persistence for derived views.
//!
//! Supports pretty-printed JSON, CSV tables, and a full dashboard export
//! with an index file for the renderer to discover the datasets.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::info;

use crate::pipeline::present::{self, View};
use crate::pipeline::rank::{self, Metric};
use crate::pipeline::types::{CoordinateRecord, RawRecord};
use crate::pipeline::{aggregate, enrich};

/// Logs a view as pretty-printed JSON.
pub fn print_json<T: Serialize>(view: &View<T>) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}

/// Writes a view as pretty JSON to `path`.
pub fn write_view_json<T: Serialize>(path: &Path, view: &View<T>) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(view)?)?;
    info!(path = %path.display(), rows = view.rows.len(), "view written");
    Ok(())
}

/// Writes derived rows as a CSV table with a header row.
pub fn write_table_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = rows.len(), "table written");
    Ok(())
}

/// Summary entry for one exported view.
#[derive(Serialize)]
struct ViewIndexEntry {
    view: &'static str,
    file: String,
    title: String,
    rows: usize,
}

/// Top-level index of an exported dashboard, written as `index.json`.
#[derive(Serialize)]
struct DashboardIndex {
    generated_at: DateTime<Utc>,
    views: Vec<ViewIndexEntry>,
}

fn export_view<T: Serialize>(
    out_dir: &Path,
    name: &'static str,
    view: &View<T>,
    entries: &mut Vec<ViewIndexEntry>,
) -> Result<()> {
    let file = format!("{name}.json");
    write_view_json(&out_dir.join(&file), view)?;
    entries.push(ViewIndexEntry {
        view: name,
        file,
        title: view.title.clone(),
        rows: view.rows.len(),
    });
    Ok(())
}

/// Derives every dashboard dataset and writes each as JSON into `out_dir`,
/// plus an `index.json` listing what was produced.
pub fn export_dashboard(
    out_dir: &Path,
    records: &[RawRecord],
    coordinates: &[CoordinateRecord],
    metric: Metric,
    n: usize,
) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let mut entries = Vec::new();

    let units = present::housing_units_per_year_view(aggregate::yearly_housing_units(records));
    export_view(out_dir, "housing_units_per_year", &units, &mut entries)?;

    let price_rent = present::yearly_price_rent_view(aggregate::yearly_price_rent(records));
    export_view(out_dir, "yearly_price_rent", &price_rent, &mut entries)?;

    let map = present::neighborhood_map_view(enrich::enrich(
        &aggregate::neighborhood_means(records),
        coordinates,
    ));
    export_view(out_dir, "neighborhood_map", &map, &mut entries)?;

    let top = rank::top_neighborhoods(records, metric, n);
    let ranking = present::top_neighborhoods_view(top.ranking, metric, n);
    export_view(out_dir, "top_neighborhoods", &ranking, &mut entries)?;
    let per_year = present::top_neighborhoods_per_year_view(top.per_year, n);
    export_view(out_dir, "top_neighborhoods_per_year", &per_year, &mut entries)?;

    let index = DashboardIndex {
        generated_at: Utc::now(),
        views: entries,
    };
    fs::write(
        out_dir.join("index.json"),
        serde_json::to_string_pretty(&index)?,
    )?;

    info!(out_dir = %out_dir.display(), views = index.views.len(), "dashboard exported");
    Ok(())
}
