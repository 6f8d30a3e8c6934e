// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::ingest_service::IngestService;
use crate::application::telemetry_store::TelemetryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub ingest_service: IngestService,
    pub chart_service: ChartService,
}

impl AppState {
    /// Wire both services to the same store
    pub fn new(store: Arc<dyn TelemetryStore>) -> Self {
        Self {
            ingest_service: IngestService::new(store.clone()),
            chart_service: ChartService::new(store),
        }
    }
}
