//! WeatherAPI.com `current.json` wire format.
//!
//! Every field is optional so that incomplete or unexpected payloads are
//! classified instead of failing deserialization.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct WaResponse {
    pub current: Option<WaCurrent>,
    pub error: Option<WaError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WaCurrent {
    pub temp_c: Option<f64>,
    pub condition: Option<WaCondition>,
    pub humidity: Option<f64>,
    pub wind_kph: Option<f64>,
    pub uv: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WaCondition {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WaError {
    pub code: Option<i64>,
    pub message: Option<String>,
}
