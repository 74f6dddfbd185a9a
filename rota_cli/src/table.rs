use comfy_table::Table;
use rota_sequencer::route::optimized_route::OptimizedRoute;

pub fn route_table(route: &OptimizedRoute) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Id", "Type", "Address", "Done"]);

    for stop in &route.stops {
        let role = match serde_json::to_value(stop.address.role) {
            Ok(serde_json::Value::String(role)) => role,
            _ => String::new(),
        };

        table.add_row(vec![
            stop.order.to_string(),
            stop.id().to_owned(),
            role,
            stop.address.address.clone(),
            if stop.completed { "x" } else { "" }.to_owned(),
        ]);
    }

    table
}

/// One-line progress summary printed under the table.
pub fn route_summary(route: &OptimizedRoute) -> String {
    let destinations = route.stops.len().saturating_sub(1);

    format!(
        "{} destinations, {} completed, total {} (created {})",
        destinations,
        route.completed_count(),
        route.total_distance,
        route.created_at
    )
}
