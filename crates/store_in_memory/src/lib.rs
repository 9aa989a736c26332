use async_trait::async_trait;
use model::record::ExponentRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use store::{RecordStore, StoreError};

/// Keeps records in a map keyed by `ID`, for tests and local runs.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<Mutex<HashMap<String, ExponentRecord>>>,
}

impl InMemoryRecordStore {
    pub fn get(&self, id: &str) -> Option<ExponentRecord> {
        self.guard().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> MutexGuard<'_, HashMap<String, ExponentRecord>> {
        // A panic while holding the lock can't leave the map half written
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn put_record(&self, record: ExponentRecord) -> Result<(), StoreError> {
        self.guard().insert(record.id.clone(), record);

        Ok(())
    }
}
