use parking_lot::RwLock;

use crate::{
    route::optimized_route::OptimizedRoute,
    snapshot::route_store::{RouteStore, StoreError},
};

/// Keeps the serialized snapshot in memory, the way a browser keeps it in
/// local storage.
#[derive(Default)]
pub struct InMemoryRouteStore {
    slot: RwLock<Option<String>>,
}

impl InMemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw content of the slot.
    pub fn raw(&self) -> Option<String> {
        self.slot.read().clone()
    }
}

impl RouteStore for InMemoryRouteStore {
    fn save(&self, route: &OptimizedRoute) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(route)?;
        *self.slot.write() = Some(serialized);

        Ok(())
    }

    fn load(&self) -> Result<Option<OptimizedRoute>, StoreError> {
        let slot = self.slot.read();

        match slot.as_deref() {
            Some(serialized) => Ok(Some(serde_json::from_str(serialized)?)),
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.write() = None;

        Ok(())
    }
}
