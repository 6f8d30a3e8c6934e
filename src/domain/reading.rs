// Sensor reading value parsing
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel the OBD adapters send when a sensor did not answer.
pub const NO_DATA: &str = "NO DATA";

// A valid value is "<number><unit>"; the unit may contain spaces or be empty.
static VALID_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<number>[0-9]+\.?[0-9]*)(?P<unit>[^0-9]*)$").unwrap());

/// Extract the numeric token from a raw reading such as `"45.2 kPa"`.
///
/// Returns `None` for empty strings, the `NO DATA` sentinel and anything that
/// does not start with a number followed only by unit text. The number is kept
/// as text so the stored value is exactly what the vehicle reported.
pub fn parse_reading(raw: &str) -> Option<String> {
    if raw.is_empty() || raw == NO_DATA {
        return None;
    }

    VALID_VALUE
        .captures(raw)
        .and_then(|caps| caps.name("number"))
        .map(|number| number.as_str().to_string())
}
