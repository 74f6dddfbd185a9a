use tracing::debug;

use crate::{
    route::optimized_route::OptimizedRoute,
    snapshot::route_store::{RouteStore, StoreError},
};

/// Marks a stop of the stored route as completed and writes the route back.
///
/// Returns the stored route after the update, `None` when the slot is empty.
/// An unknown or already completed stop leaves the slot untouched. This is a
/// plain read-modify-write, callers serialize completion updates.
pub fn mark_completed<S>(store: &S, stop_id: &str) -> Result<Option<OptimizedRoute>, StoreError>
where
    S: RouteStore + ?Sized,
{
    let Some(mut route) = store.load()? else {
        debug!("No stored route, ignoring completion of {}", stop_id);
        return Ok(None);
    };

    if route.mark_completed(stop_id) {
        store.save(&route)?;
    } else {
        debug!("Stop {} not found or already completed", stop_id);
    }

    Ok(Some(route))
}

#[cfg(test)]
mod tests {
    use crate::{snapshot::memory_store::InMemoryRouteStore, test_utils::create_test_route};

    use super::*;

    #[test]
    fn test_marks_stop_and_saves() {
        let store = InMemoryRouteStore::new();
        store.save(&create_test_route()).unwrap();

        let route = mark_completed(&store, "B").unwrap().unwrap();
        assert!(route.stop("B").unwrap().completed);

        let stored = store.load().unwrap().unwrap();
        assert!(stored.stop("B").unwrap().completed);
        assert!(!stored.stop("A").unwrap().completed);
    }

    #[test]
    fn test_unknown_stop_is_a_no_op() {
        let store = InMemoryRouteStore::new();
        store.save(&create_test_route()).unwrap();
        let before = store.raw();

        let route = mark_completed(&store, "does-not-exist").unwrap().unwrap();

        assert_eq!(store.raw(), before);
        assert!(route.stops.iter().all(|stop| !stop.completed));
    }

    #[test]
    fn test_empty_slot_is_a_no_op() {
        let store = InMemoryRouteStore::new();

        assert!(mark_completed(&store, "A").unwrap().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_completion_never_reverts() {
        let store = InMemoryRouteStore::new();
        store.save(&create_test_route()).unwrap();

        mark_completed(&store, "A").unwrap();
        let route = mark_completed(&store, "A").unwrap().unwrap();

        assert!(route.stop("A").unwrap().completed);
        assert_eq!(route.completed_count(), 1);
    }
}
