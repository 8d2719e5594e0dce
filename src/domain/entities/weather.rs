//! Weather record entity returned to clients and stored in the cache.

use serde::{Deserialize, Serialize};

/// Current conditions for a city, normalized from the provider payload.
///
/// Serialized verbatim as the success body of `GET /weather/{city}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Human-readable condition text, e.g. `"Sunny"`.
    pub condition: String,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Wind speed in kilometres per hour.
    pub wind: f64,
    /// UV index.
    pub uv: f64,
}

impl WeatherRecord {
    /// Builds a record from optional provider fields.
    ///
    /// Returns `None` unless all five fields are present and non-falsy:
    /// numbers must be non-zero and not NaN, the condition non-empty.
    /// A record failing this check is never cached or returned as success.
    pub fn from_parts(
        temperature: Option<f64>,
        condition: Option<String>,
        humidity: Option<f64>,
        wind: Option<f64>,
        uv: Option<f64>,
    ) -> Option<Self> {
        let record = Self {
            temperature: temperature.filter(|v| is_truthy(*v))?,
            condition: condition.filter(|c| !c.is_empty())?,
            humidity: humidity.filter(|v| is_truthy(*v))?,
            wind: wind.filter(|v| is_truthy(*v))?,
            uv: uv.filter(|v| is_truthy(*v))?,
        };
        Some(record)
    }
}

fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
