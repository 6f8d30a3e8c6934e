// Application layer - Use cases over the telemetry store
pub mod chart_service;
pub mod ingest_service;
pub mod telemetry_store;
