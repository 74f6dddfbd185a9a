use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use rota_sequencer::{
    config::RotaConfig,
    json::types::JsonSequenceRequest,
    route::optimized_route::OptimizedRoute,
    sequencer::Sequencer,
    snapshot::RouteStore,
};
use tracing::{info, warn};

use crate::{parsers, table};

#[derive(Args)]
pub struct OptimizeArgs {
    /// JSON file with `start`, `deliveries` and `pickups`
    #[arg(short, long)]
    input: PathBuf,

    /// Skip the external ranking provider
    #[arg(long)]
    local: bool,

    /// Give up on the ranking provider after this long (e.g., "30s", "PT1M")
    #[arg(short, long, value_parser = parsers::parse_duration, default_value = "30s")]
    timeout: jiff::SignedDuration,
}

pub fn read_request(path: &Path) -> Result<JsonSequenceRequest, anyhow::Error> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let request: JsonSequenceRequest = serde_json::from_str(&content)
        .with_context(|| format!("Invalid input file {}", path.display()))?;

    Ok(request)
}

pub async fn sequence(
    request: &JsonSequenceRequest,
    sequencer: &Sequencer,
    timeout: jiff::SignedDuration,
) -> Result<OptimizedRoute, anyhow::Error> {
    match tokio::time::timeout(timeout.unsigned_abs(), request.sequence(sequencer)).await {
        Ok(route) => Ok(route?),
        Err(_) => {
            warn!("Sequencing timed out after {}, using nearest neighbor", timeout);
            Ok(request.sequence_locally()?)
        }
    }
}

pub async fn run(
    args: OptimizeArgs,
    config: &RotaConfig,
    store: &dyn RouteStore,
) -> Result<(), anyhow::Error> {
    let request = read_request(&args.input)?;

    if request.destination_count() == 0 {
        anyhow::bail!("At least one delivery or pickup is required");
    }

    info!(
        "Sequencing {} destinations ({} geocoded)",
        request.destination_count(),
        request.geocoded_destination_count()
    );

    let sequencer = if args.local {
        Sequencer::local()
    } else {
        config.build_sequencer()?
    };

    let route = sequence(&request, &sequencer, args.timeout).await?;
    store.save(&route)?;

    println!("{}", table::route_table(&route));
    println!("{}", table::route_summary(&route));

    Ok(())
}
