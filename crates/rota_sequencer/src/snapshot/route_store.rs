use thiserror::Error;

use crate::route::optimized_route::OptimizedRoute;

/// Key of the single slot holding the last computed route.
pub const SNAPSHOT_KEY: &str = "optimizedRoute";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot (de)serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A single persisted route. Every `save` replaces the previous content,
/// concurrent writers race and the last one wins.
pub trait RouteStore: Send + Sync {
    fn save(&self, route: &OptimizedRoute) -> Result<(), StoreError>;

    fn load(&self) -> Result<Option<OptimizedRoute>, StoreError>;

    fn clear(&self) -> Result<(), StoreError>;
}
