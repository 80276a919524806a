//! InMemoryRecordStore - Vec-backed ordered store for page-local state.

use std::sync::{Arc, RwLock};

use crate::error::StoreError;
use crate::record::Record;

use super::RecordStore;

/// In-memory record store backed by an ordered `Vec`.
///
/// The single store instance owns all records for its page session;
/// readers get clones. Clone-friendly via Arc, so a controller and a view
/// can share the same storage.
#[derive(Clone, Debug)]
pub struct InMemoryRecordStore<R> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> InMemoryRecordStore<R> {
    /// Create a new empty store.
    pub fn new() -> Self {
        InMemoryRecordStore {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<R: Record> InMemoryRecordStore<R> {
    /// Create a store pre-populated with a seed sequence, in the given
    /// order. Fails with `DuplicateId` if the seed repeats an id.
    pub fn with_records(records: Vec<R>) -> Result<Self, StoreError> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id() == record.id()) {
                return Err(StoreError::DuplicateId {
                    collection: R::COLLECTION.to_string(),
                    id: record.id().to_string(),
                });
            }
        }
        Ok(InMemoryRecordStore {
            records: Arc::new(RwLock::new(records)),
        })
    }
}

impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    fn get_all(&self) -> Result<Vec<R>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(records.clone())
    }

    fn get(&self, id: &str) -> Result<Option<R>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    fn insert(&self, record: R) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::DuplicateId {
                collection: R::COLLECTION.to_string(),
                id: record.id().to_string(),
            });
        }

        // New records go first, like the source collections.
        records.insert(0, record);
        Ok(())
    }

    fn replace(&self, id: &str, record: R) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("replace"))?;

        let position = records.iter().position(|r| r.id() == id).ok_or_else(|| {
            StoreError::NotFound {
                collection: R::COLLECTION.to_string(),
                id: id.to_string(),
            }
        })?;

        // Guard uniqueness even if the replacement carries a different id.
        if record.id() != id && records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::DuplicateId {
                collection: R::COLLECTION.to_string(),
                id: record.id().to_string(),
            });
        }

        records[position] = record;
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;

        let before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() != before)
    }

    fn count(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("count"))?;
        Ok(records.len())
    }
}
