use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    route::optimized_route::OptimizedRoute,
    snapshot::route_store::{RouteStore, SNAPSHOT_KEY, StoreError},
};

/// Stores the snapshot as `optimizedRoute.json` inside a directory.
///
/// Saves go through a sibling temporary file renamed over the slot, so a
/// crash mid-write leaves the previous snapshot readable.
pub struct FileRouteStore {
    path: PathBuf,
    temp_path: PathBuf,
}

impl FileRouteStore {
    /// Creates the directory if it does not exist yet.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, StoreError> {
        let directory = directory.as_ref();
        std::fs::create_dir_all(directory)?;

        Ok(Self {
            path: directory.join(format!("{}.json", SNAPSHOT_KEY)),
            temp_path: directory.join(format!("{}.json.tmp", SNAPSHOT_KEY)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RouteStore for FileRouteStore {
    fn save(&self, route: &OptimizedRoute) -> Result<(), StoreError> {
        let file = File::create(&self.temp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, route)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);

        std::fs::rename(&self.temp_path, &self.path)?;

        debug!("Saved route snapshot to {}", self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<Option<OptimizedRoute>, StoreError> {
        if !self.path.is_file() {
            return Ok(None);
        }

        let file = File::open(&self.path)?;
        let route: OptimizedRoute = serde_json::from_reader(BufReader::new(file))?;

        Ok(Some(route))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
