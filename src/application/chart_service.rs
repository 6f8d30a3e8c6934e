// Chart service - Use case for building the telemetry chart
use crate::application::telemetry_store::TelemetryStore;
use crate::domain::chart::{aggregate, ChartSeries};
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    store: Arc<dyn TelemetryStore>,
}

impl ChartService {
    pub fn new(store: Arc<dyn TelemetryStore>) -> Self {
        Self { store }
    }

    pub fn chart(&self) -> ChartSeries {
        let records = self.store.snapshot();
        tracing::debug!("Building chart from {} records", records.len());
        aggregate(&records)
    }
}
