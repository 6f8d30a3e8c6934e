// Domain layer - Telemetry records, reading parsing and chart derivation
pub mod chart;
pub mod reading;
pub mod record;
