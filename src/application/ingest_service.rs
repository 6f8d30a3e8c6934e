// Ingest service - Use case for accepting pushed telemetry
use crate::application::telemetry_store::TelemetryStore;
use crate::domain::record::{NormalizedRecord, RawRecord};
use std::sync::Arc;

#[derive(Clone)]
pub struct IngestService {
    store: Arc<dyn TelemetryStore>,
}

impl IngestService {
    pub fn new(store: Arc<dyn TelemetryStore>) -> Self {
        Self { store }
    }

    /// Normalize a raw record and append it to the store.
    ///
    /// Normalization happens before the store is touched, so the write lock is
    /// only held for the push itself.
    pub fn ingest(&self, raw: RawRecord) -> NormalizedRecord {
        let record = raw.into_normalized();
        tracing::debug!(?record, "Normalized telemetry record");

        self.store.append(record.clone());
        tracing::info!(
            vehicle_id = %record.vehicle_id,
            timestamp = %record.timestamp,
            stored = self.store.len(),
            "Ingested telemetry record"
        );

        record
    }
}
