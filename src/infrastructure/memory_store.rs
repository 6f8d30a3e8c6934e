// In-memory store implementation
use crate::application::telemetry_store::TelemetryStore;
use crate::domain::record::NormalizedRecord;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-lifetime record log guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<NormalizedRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Records are fully built before the write lock is taken, so a poisoned
    // lock still guards a consistent Vec.
    fn read(&self) -> RwLockReadGuard<'_, Vec<NormalizedRecord>> {
        self.records.read().unwrap_or_else(|poisoned| {
            tracing::warn!("Recovering poisoned telemetry store lock");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<NormalizedRecord>> {
        self.records.write().unwrap_or_else(|poisoned| {
            tracing::warn!("Recovering poisoned telemetry store lock");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl TelemetryStore for InMemoryStore {
    fn append(&self, record: NormalizedRecord) {
        self.write().push(record);
    }

    fn snapshot(&self) -> Vec<NormalizedRecord> {
        self.read().clone()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
