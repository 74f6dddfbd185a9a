pub mod file_store;
pub mod memory_store;
pub mod route_store;
pub mod tracking;

pub use file_store::FileRouteStore;
pub use memory_store::InMemoryRouteStore;
pub use route_store::{RouteStore, SNAPSHOT_KEY, StoreError};
pub use tracking::mark_completed;
