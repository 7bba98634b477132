//! Backing store for one record collection.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use planner_models::Record;
use tracing::debug;

use crate::atomic::{atomic_write_json, read_json_optional};
use crate::error::{PersistenceError, Result};

/// Reads and writes the whole collection of one record kind.
///
/// The collection is stored as a single JSON array, sorted by identifier:
/// ```text
/// state_dir/
/// └── stores/
///     ├── employees.json
///     ├── events.json
///     └── ...
/// ```
/// Every save replaces the file atomically.
#[derive(Debug, Clone)]
pub struct CollectionStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> CollectionStore<R> {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Creates a store named after the record kind inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", R::KIND.plural())))
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted collection.
    ///
    /// A missing or empty file is an empty collection.
    ///
    /// # Errors
    /// `StoreUnreadable` if the file has content that is not a list of
    /// records, `InvalidData` if an identifier appears twice.
    pub fn load(&self) -> Result<BTreeMap<R::Id, R>> {
        let records: Vec<R> = match read_json_optional(&self.path)? {
            Some(records) => records,
            None => {
                debug!(kind = %R::KIND, path = %self.path.display(), "No existing store");
                return Ok(BTreeMap::new());
            }
        };

        let mut collection = BTreeMap::new();
        for record in records {
            let id = record.id().clone();
            if collection.insert(id.clone(), record).is_some() {
                return Err(PersistenceError::InvalidData {
                    path: self.path.clone(),
                    reason: format!("duplicate {} id '{}'", R::KIND, id),
                });
            }
        }

        debug!(kind = %R::KIND, count = collection.len(), "Loaded store");
        Ok(collection)
    }

    /// Replaces the persisted collection with `records`.
    pub fn save(&self, records: &BTreeMap<R::Id, R>) -> Result<()> {
        let list: Vec<&R> = records.values().collect();
        atomic_write_json(&self.path, &list)?;
        debug!(kind = %R::KIND, count = list.len(), "Saved store");
        Ok(())
    }
}
