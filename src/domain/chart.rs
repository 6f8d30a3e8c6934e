// Chart domain models and aggregation
use super::record::{NormalizedRecord, SensorField};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const LABEL_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSet {
    pub field_name: String,
    pub rgb_color: String,
    pub values: Vec<String>,
}

impl DataSet {
    pub fn new(field_name: &str, rgb_color: &str, capacity: usize) -> Self {
        Self {
            field_name: field_name.to_string(),
            rgb_color: rgb_color.to_string(),
            values: Vec::with_capacity(capacity),
        }
    }
}

/// Label and series arrays for the line chart.
///
/// `range_start`/`range_end` are `None` when there are no records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub range_start: Option<DateTime<Utc>>,
    pub range_end: Option<DateTime<Utc>>,
    pub labels: Vec<String>,
    pub datasets: Vec<DataSet>,
}

/// Engine RPM scaled for plotting next to speed and throttle.
///
/// Anything that is not a plain integer counts as zero.
pub fn rpm_hundreds(engine_rpm: Option<&str>) -> i64 {
    engine_rpm
        .and_then(|rpm| rpm.parse::<i64>().ok())
        .unwrap_or(0)
        / 100
}

/// Derive chart series from records in sequence order.
pub fn aggregate(records: &[NormalizedRecord]) -> ChartSeries {
    let mut speed = DataSet::new("Speed (km/h)", "220,220,220", records.len());
    let mut throttle = DataSet::new("Throttle (%)", "151,187,205", records.len());
    let mut rpm = DataSet::new("RPM (x100)", "70,191,189", records.len());
    let mut labels = Vec::with_capacity(records.len());

    for record in records {
        labels.push(record.timestamp.format(LABEL_FORMAT).to_string());
        speed
            .values
            .push(record.field(SensorField::Speed).unwrap_or_default().to_string());
        throttle.values.push(
            record
                .field(SensorField::ThrottlePosition)
                .unwrap_or_default()
                .to_string(),
        );
        rpm.values
            .push(rpm_hundreds(record.field(SensorField::EngineRpm)).to_string());
    }

    ChartSeries {
        range_start: records.first().map(|r| r.timestamp),
        range_end: records.last().map(|r| r.timestamp),
        labels,
        datasets: vec![speed, throttle, rpm],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl ChartSeries {
        pub fn speed(&self) -> &DataSet {
            &self.datasets[0]
        }

        pub fn throttle(&self) -> &DataSet {
            &self.datasets[1]
        }

        pub fn rpm(&self) -> &DataSet {
            &self.datasets[2]
        }
    }

    fn record(epoch_millis: i64, speed: Option<&str>, rpm: Option<&str>) -> NormalizedRecord {
        let mut record = NormalizedRecord::new("VIN".to_string(), epoch_millis, 0.0, 0.0);
        record.speed = speed.map(str::to_string);
        record.engine_rpm = rpm.map(str::to_string);
        record
    }

    #[test]
    fn test_empty_input() {
        let chart = aggregate(&[]);
        assert_eq!(chart.range_start, None);
        assert_eq!(chart.range_end, None);
        assert!(chart.labels.is_empty());
        assert_eq!(chart.datasets.len(), 3);
        assert!(chart.datasets.iter().all(|d| d.values.is_empty()));
    }

    #[test]
    fn test_rpm_series() {
        let records = vec![
            record(0, None, Some("1000")),
            record(1000, None, None),
            record(2000, None, Some("999")),
        ];
        let chart = aggregate(&records);
        assert_eq!(chart.rpm().values, vec!["10", "0", "9"]);
    }

    #[test]
    fn test_rpm_hundreds() {
        assert_eq!(rpm_hundreds(Some("2150")), 21);
        assert_eq!(rpm_hundreds(Some("99")), 0);
        assert_eq!(rpm_hundreds(Some("2150.5")), 0);
        assert_eq!(rpm_hundreds(Some("")), 0);
        assert_eq!(rpm_hundreds(None), 0);
    }

    #[test]
    fn test_labels_and_values_align() {
        let mut first = record(3_723_000, Some("64"), Some("3000"));
        first.throttle_position = Some("17.6".to_string());
        let records = vec![first, record(3_724_000, None, None)];

        let chart = aggregate(&records);
        assert_eq!(chart.labels, vec!["01:02:03", "01:02:04"]);
        assert_eq!(chart.speed().values, vec!["64", ""]);
        assert_eq!(chart.throttle().values, vec!["17.6", ""]);
        assert_eq!(chart.rpm().values, vec!["30", "0"]);
        assert_eq!(chart.speed().field_name, "Speed (km/h)");
        assert_eq!(chart.rpm().rgb_color, "70,191,189");
    }

    #[test]
    fn test_range_follows_sequence_order() {
        let records = vec![record(5000, None, None), record(1000, None, None)];
        let chart = aggregate(&records);
        assert_eq!(chart.range_start.map(|t| t.timestamp_millis()), Some(5000));
        assert_eq!(chart.range_end.map(|t| t.timestamp_millis()), Some(1000));
        assert_eq!(chart.labels, vec!["00:00:05", "00:00:01"]);
    }
}
