// Store trait for telemetry records
use crate::domain::record::NormalizedRecord;

/// Append-only, ordered log of normalized records shared by ingest and charting.
pub trait TelemetryStore: Send + Sync {
    /// Add a record to the end of the log
    fn append(&self, record: NormalizedRecord);

    /// Point-in-time copy of every stored record, in append order
    fn snapshot(&self) -> Vec<NormalizedRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
