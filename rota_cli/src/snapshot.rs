use rota_sequencer::snapshot::{RouteStore, mark_completed};
use tracing::info;

use crate::table;

pub fn show(store: &dyn RouteStore) -> Result<(), anyhow::Error> {
    match store.load()? {
        Some(route) => {
            println!("{}", table::route_table(&route));
            println!("{}", table::route_summary(&route));
            if let Some(next) = route.next_stop() {
                println!("Next: {} ({})", next.id(), next.address.address);
            }
        }
        None => info!("No saved route"),
    }

    Ok(())
}

pub fn complete(store: &dyn RouteStore, stop_id: &str) -> Result<(), anyhow::Error> {
    let Some(route) = mark_completed(store, stop_id)? else {
        anyhow::bail!("No saved route, run `rota optimize` first");
    };

    match route.stop(stop_id) {
        Some(_) => info!(
            "Stop {} completed ({}/{})",
            stop_id,
            route.completed_count(),
            route.stops.len().saturating_sub(1)
        ),
        None => info!("Stop {} is not part of the saved route", stop_id),
    }

    Ok(())
}

pub fn clear(store: &dyn RouteStore) -> Result<(), anyhow::Error> {
    store.clear()?;
    info!("Saved route cleared");

    Ok(())
}
