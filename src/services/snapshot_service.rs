use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub type SharedSnapshotService<V> = Arc<Mutex<SnapshotService<V>>>;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to access the snapshot file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize the snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A full-list JSON snapshot stored under a single fixed path.
///
/// The whole list is written on every save; the last writer wins. Values
/// only need to be serde round-trippable, the service does not care what
/// they are.
#[derive(Debug, Clone)]
pub struct SnapshotService<V> {
    path: PathBuf,
    _marker: PhantomData<V>,
}

impl<V> SnapshotService<V>
where
    V: Serialize + DeserializeOwned,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the full list, replacing whatever was stored before.
    pub fn save(&mut self, values: &[V]) -> Result<(), SnapshotError> {
        let json = serde_json::to_string(values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Reads the stored list.
    ///
    /// A missing file yields `None`. So does a file that no longer parses:
    /// a corrupted snapshot is logged and discarded rather than aborting
    /// the session.
    pub fn load(&mut self) -> Result<Option<Vec<V>>, SnapshotError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&json) {
            Ok(values) => Ok(Some(values)),
            Err(e) => {
                log::warn!(
                    "discarding malformed snapshot {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    /// Removes the stored list. Clearing an absent snapshot is not an error.
    pub fn clear(&mut self) -> Result<(), SnapshotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> SnapshotService<String> {
        SnapshotService::new(dir.path().join("values.json"))
    }

    #[test]
    fn save_then_load_round_trips_by_value() {
        let dir = TempDir::new().unwrap();
        let mut store = service(&dir);

        let values = vec!["mug".to_owned(), "shirt".to_owned()];
        store.save(&values).unwrap();

        assert_eq!(store.load().unwrap(), Some(values));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let mut store = service(&dir);

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn malformed_file_is_treated_as_absent() {
        let dir = TempDir::new().unwrap();
        let mut store = service(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clear_removes_the_file_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let mut store = service(&dir);

        store.save(&["mug".to_owned()]).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // clearing again is still fine
        store.clear().unwrap();
    }
}
