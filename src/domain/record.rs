// Telemetry record domain models
use super::reading::parse_reading;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Record as pushed by the vehicle (wire format).
///
/// Every field is optional on the wire and falls back to its zero value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    #[serde(rename = "Vin", alias = "vin", alias = "vehicleId")]
    pub vehicle_id: String,
    #[serde(rename = "Timestamp", alias = "timestamp", alias = "epochMillis")]
    pub epoch_millis: i64,
    #[serde(rename = "Latitude", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude", alias = "longitude")]
    pub longitude: f64,
    #[serde(rename = "Readings", alias = "readings")]
    pub readings: HashMap<String, String>,
}

impl RawRecord {
    pub fn into_normalized(self) -> NormalizedRecord {
        normalize(
            self.vehicle_id,
            self.epoch_millis,
            self.latitude,
            self.longitude,
            &self.readings,
        )
    }
}

/// Fixed-schema, unit-stripped telemetry sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub vehicle_id: String,
    pub epoch_millis: i64,
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub barometric_pressure: Option<String>,
    pub intake_manifold_pressure: Option<String>,
    pub engine_rpm: Option<String>,
    pub engine_coolant_temp: Option<String>,
    pub ambient_air_temp: Option<String>,
    pub speed: Option<String>,
    pub throttle_position: Option<String>,
    pub air_intake_temp: Option<String>,
}

impl NormalizedRecord {
    /// Record with position and time set and every sensor field absent.
    pub fn new(vehicle_id: String, epoch_millis: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            vehicle_id,
            epoch_millis,
            timestamp: timestamp_from_millis(epoch_millis),
            latitude,
            longitude,
            barometric_pressure: None,
            intake_manifold_pressure: None,
            engine_rpm: None,
            engine_coolant_temp: None,
            ambient_air_temp: None,
            speed: None,
            throttle_position: None,
            air_intake_temp: None,
        }
    }

    pub fn field(&self, field: SensorField) -> Option<&str> {
        let value = match field {
            SensorField::BarometricPressure => &self.barometric_pressure,
            SensorField::IntakeManifoldPressure => &self.intake_manifold_pressure,
            SensorField::EngineRpm => &self.engine_rpm,
            SensorField::EngineCoolantTemp => &self.engine_coolant_temp,
            SensorField::AmbientAirTemp => &self.ambient_air_temp,
            SensorField::Speed => &self.speed,
            SensorField::ThrottlePosition => &self.throttle_position,
            SensorField::AirIntakeTemp => &self.air_intake_temp,
        };
        value.as_deref()
    }
}

/// The normalized fields a reading can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorField {
    BarometricPressure,
    IntakeManifoldPressure,
    EngineRpm,
    EngineCoolantTemp,
    AmbientAirTemp,
    Speed,
    ThrottlePosition,
    AirIntakeTemp,
}

/// Known sensor keys, matched exactly against incoming reading names.
pub const SENSOR_KEYS: [(&str, SensorField); 8] = [
    ("BAROMETRIC_PRESSURE", SensorField::BarometricPressure),
    ("INTAKE_MANIFOLD_PRESSURE", SensorField::IntakeManifoldPressure),
    ("ENGINE_RPM", SensorField::EngineRpm),
    ("ENGINE_COOLANT_TEMP", SensorField::EngineCoolantTemp),
    ("AMBIENT_AIR_TEMP", SensorField::AmbientAirTemp),
    ("SPEED", SensorField::Speed),
    ("THROTTLE_POS", SensorField::ThrottlePosition),
    ("AIR_INTAKE_TEMP", SensorField::AirIntakeTemp),
];

impl SensorField {
    pub fn from_key(key: &str) -> Option<Self> {
        SENSOR_KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, field)| *field)
    }

    pub fn key(self) -> &'static str {
        SENSOR_KEYS
            .iter()
            .find(|(_, field)| *field == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    fn slot(self, record: &mut NormalizedRecord) -> &mut Option<String> {
        match self {
            SensorField::BarometricPressure => &mut record.barometric_pressure,
            SensorField::IntakeManifoldPressure => &mut record.intake_manifold_pressure,
            SensorField::EngineRpm => &mut record.engine_rpm,
            SensorField::EngineCoolantTemp => &mut record.engine_coolant_temp,
            SensorField::AmbientAirTemp => &mut record.ambient_air_temp,
            SensorField::Speed => &mut record.speed,
            SensorField::ThrottlePosition => &mut record.throttle_position,
            SensorField::AirIntakeTemp => &mut record.air_intake_temp,
        }
    }
}

/// Unix epoch plus `epoch_millis` milliseconds, in UTC.
///
/// Values outside chrono's range saturate to the nearest representable instant.
pub fn timestamp_from_millis(epoch_millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(epoch_millis).unwrap_or(if epoch_millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Build a fixed-schema record from a raw reading bag.
///
/// Unknown keys and readings that do not parse are dropped; this never fails.
pub fn normalize(
    vehicle_id: String,
    epoch_millis: i64,
    latitude: f64,
    longitude: f64,
    readings: &HashMap<String, String>,
) -> NormalizedRecord {
    let mut record = NormalizedRecord::new(vehicle_id, epoch_millis, latitude, longitude);

    for (name, raw) in readings {
        let Some(field) = SensorField::from_key(name) else {
            continue;
        };
        match parse_reading(raw) {
            Some(value) => *field.slot(&mut record) = Some(value),
            None => tracing::trace!(sensor = field.key(), raw = %raw, "Skipping unparsed reading"),
        }
    }

    record
}
