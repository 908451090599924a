//! Fetch driving paths for a delivery route plan.
//!
//! Reads a plan file of stops and waypoint-index trajectories, fetches one
//! road polyline per leg through the directions provider, and writes the
//! result as JSON for the map front-end to draw.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use coldroute_core::{expand_trajectories, spatial, Coordinate, Path, RoutePair, Stop};
use coldroute_sdk::{AmapClient, DirectionsConfig};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fetch driving paths for every leg of a delivery route plan
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Route plan JSON file: { "stops": [...], "trajectories": [[0,1,2], ...] }
    plan: PathBuf,

    /// Directions API web-service key (default: COLDROUTE_AMAP_KEY)
    #[arg(long)]
    key: Option<String>,

    /// Pause between consecutive directions requests, in milliseconds
    #[arg(long, default_value_t = 600)]
    delay_ms: u64,

    /// Provider routing strategy ("32" = avoid congestion)
    #[arg(long, default_value = "32")]
    strategy: String,

    /// Write the fetched legs to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RoutePlanFile {
    stops: Vec<Stop>,
    trajectories: Vec<Vec<usize>>,
}

/// One fetched leg, ready for the renderer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LegRecord {
    origin: Coordinate,
    destination: Coordinate,
    path: Path,
    direct_km: f64,
    road_km: f64,
    summary: String,
}

impl LegRecord {
    fn new(pair: RoutePair, path: Path) -> Self {
        Self {
            origin: pair.origin,
            destination: pair.destination,
            direct_km: spatial::haversine_km(pair.origin, pair.destination),
            road_km: spatial::path_length_km(&path),
            summary: spatial::leg_summary(&pair, &path),
            path,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coldroute=info".parse()?)
                .add_directive("coldroute_sdk=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.key {
        Some(key) => DirectionsConfig::new(key.clone()),
        None => DirectionsConfig::from_env(),
    };
    config.request_delay = Duration::from_millis(args.delay_ms);
    config.strategy = args.strategy.clone();
    anyhow::ensure!(
        !config.api_key.is_empty(),
        "no directions API key: pass --key or set COLDROUTE_AMAP_KEY"
    );

    let file = File::open(&args.plan)
        .with_context(|| format!("cannot open plan file {}", args.plan.display()))?;
    let plan: RoutePlanFile =
        serde_json::from_reader(BufReader::new(file)).context("invalid route plan file")?;

    let pairs = expand_trajectories(&plan.stops, &plan.trajectories);
    tracing::info!(
        stops = plan.stops.len(),
        trajectories = plan.trajectories.len(),
        legs = pairs.len(),
        "fetching driving paths"
    );

    let client = AmapClient::new(config)?;
    let paths = client.fetch_batch(&pairs).await;

    let legs: Vec<LegRecord> = pairs
        .into_iter()
        .zip(paths)
        .map(|(pair, path)| LegRecord::new(pair, path))
        .collect();

    let drawable = legs.iter().filter(|l| !l.path.is_empty()).count();
    tracing::info!(legs = legs.len(), drawable, "batch complete");

    let json = serde_json::to_string_pretty(&legs)?;
    match &args.out {
        Some(out) => std::fs::write(out, json)
            .with_context(|| format!("cannot write {}", out.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
