use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One synthetic hourly sensor sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub heart_rate: u32,
    pub steps: u32,
    pub temperature: f64,
    pub pressure: u32,
    pub calories: u32,
    pub foot_pressure: FootPressure,
}

/// Per-foot pressure readings for one sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootPressure {
    pub left_foot: FootReading,
    pub right_foot: FootReading,
}

/// Inner/outer sensor pair for one foot.
///
/// `balance_percentage` is the share of total pressure borne by the inner
/// sensor, rounded to one decimal. With inner >= 60 and outer >= 1 it is
/// always strictly between 0 and 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootReading {
    pub inner_pressure: u32,
    pub outer_pressure: u32,
    pub balance_percentage: f64,
}

impl FootReading {
    pub fn new(inner: u32, outer: u32) -> Self {
        let total = f64::from(inner + outer);
        Self {
            inner_pressure: inner,
            outer_pressure: outer,
            balance_percentage: round1(f64::from(inner) / total * 100.0),
        }
    }
}

/// Round to one decimal place, half away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Wire format for timestamps: `YYYY-MM-DD HH:MM:SS`.
mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, FORMAT).map_err(de::Error::custom)
    }
}
