//! CLI entry point for the San Francisco market views tool.
//!
//! Subcommands derive the dashboard datasets from the census and
//! coordinates CSVs and print them as JSON or write them to disk.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use sfo_market_views::loader::{load_coordinates, load_records};
use sfo_market_views::output::{export_dashboard, print_json, write_view_json};
use sfo_market_views::pipeline::rank::{DEFAULT_TOP_N, Metric};
use sfo_market_views::pipeline::{aggregate, enrich, present, rank, select};
use tracing::warn;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_RECORDS: &str = "sfo_neighborhoods_census_data.csv";
const DEFAULT_COORDINATES: &str = "neighborhoods_coordinates.csv";

// Map-tile access token, consumed by the downstream map renderer only.
const MAP_TOKEN_VAR: &str = "MBOX_KEY";

#[derive(Parser)]
#[command(name = "sfo_market_views")]
#[command(about = "Derives the San Francisco housing market dashboard datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute both yearly views: housing units, and sale price with rent
    Yearly {
        /// Census records CSV
        #[arg(short, long, default_value = DEFAULT_RECORDS)]
        records: PathBuf,

        /// Directory to write the two views to instead of logging them
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Join neighborhood averages with coordinates for the map view
    Map {
        /// Census records CSV
        #[arg(short, long, default_value = DEFAULT_RECORDS)]
        records: PathBuf,

        /// Neighborhood coordinates CSV
        #[arg(short, long, default_value = DEFAULT_COORDINATES)]
        coordinates: PathBuf,

        /// File to write the view to instead of logging it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rank the top neighborhoods by a metric
    Top {
        /// Census records CSV
        #[arg(short, long, default_value = DEFAULT_RECORDS)]
        records: PathBuf,

        /// How many neighborhoods to keep
        #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
        n: usize,

        /// Ranking metric
        #[arg(short, long, value_enum, default_value = "sale-price-sqr-foot")]
        metric: Metric,

        /// Directory to write the ranking and its per-year rows to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Price history for a single neighborhood
    Series {
        /// Neighborhood name, exact match
        neighborhood: String,

        /// Census records CSV
        #[arg(short, long, default_value = DEFAULT_RECORDS)]
        records: PathBuf,

        /// Include gross rent alongside sale price
        #[arg(long, default_value_t = false)]
        rent: bool,
    },
    /// Export every dashboard view as JSON to a directory
    Export {
        /// Census records CSV
        #[arg(short, long, default_value = DEFAULT_RECORDS)]
        records: PathBuf,

        /// Neighborhood coordinates CSV
        #[arg(short, long, default_value = DEFAULT_COORDINATES)]
        coordinates: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "dashboard")]
        out_dir: PathBuf,

        /// How many neighborhoods the top ranking keeps
        #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
        n: usize,

        /// Ranking metric for the top views
        #[arg(short, long, value_enum, default_value = "sale-price-sqr-foot")]
        metric: Metric,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Yearly { records, output } => {
            let records = load_records(&records)?;
            let units = present::housing_units_per_year_view(aggregate::yearly_housing_units(&records));
            let price_rent = present::yearly_price_rent_view(aggregate::yearly_price_rent(&records));

            match output {
                Some(dir) => {
                    std::fs::create_dir_all(&dir)?;
                    write_view_json(&dir.join("housing_units_per_year.json"), &units)?;
                    write_view_json(&dir.join("yearly_price_rent.json"), &price_rent)?;
                }
                None => {
                    print_json(&units)?;
                    print_json(&price_rent)?;
                }
            }
        }
        Commands::Map {
            records,
            coordinates,
            output,
        } => {
            warn_if_map_token_missing();

            let records = load_records(&records)?;
            let coordinates = load_coordinates(&coordinates)?;
            let view = present::neighborhood_map_view(enrich::enrich(
                &aggregate::neighborhood_means(&records),
                &coordinates,
            ));

            match output {
                Some(path) => write_view_json(&path, &view)?,
                None => print_json(&view)?,
            }
        }
        Commands::Top {
            records,
            n,
            metric,
            output,
        } => {
            let records = load_records(&records)?;
            let top = rank::top_neighborhoods(&records, metric, n);
            let ranking = present::top_neighborhoods_view(top.ranking, metric, n);
            let per_year = present::top_neighborhoods_per_year_view(top.per_year, n);

            match output {
                Some(dir) => {
                    std::fs::create_dir_all(&dir)?;
                    write_view_json(&dir.join("top_neighborhoods.json"), &ranking)?;
                    write_view_json(&dir.join("top_neighborhoods_per_year.json"), &per_year)?;
                }
                None => {
                    print_json(&ranking)?;
                    print_json(&per_year)?;
                }
            }
        }
        Commands::Series {
            neighborhood,
            records,
            rent,
        } => {
            let records = load_records(&records)?;
            let table = aggregate::year_neighborhood_means(&records);

            if rent {
                let view = present::price_rent_series_view(
                    select::price_rent_series(&table, &neighborhood),
                    &neighborhood,
                );
                print_json(&view)?;
            } else {
                let view = present::price_series_view(
                    select::price_series(&table, &neighborhood),
                    &neighborhood,
                );
                print_json(&view)?;
            }
        }
        Commands::Export {
            records,
            coordinates,
            out_dir,
            n,
            metric,
        } => {
            warn_if_map_token_missing();

            let records = load_records(&records)?;
            let coordinates = load_coordinates(&coordinates)?;
            export_dashboard(&out_dir, &records, &coordinates, metric, n)?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/sfo_market_views.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("sfo_market_views.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    file_guard
}

fn warn_if_map_token_missing() {
    if std::env::var(MAP_TOKEN_VAR).is_err() {
        warn!(
            var = MAP_TOKEN_VAR,
            "map tile access token not set; the downstream map renderer will have no tiles"
        );
    }
}
