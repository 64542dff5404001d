//! JSON wire models for the API responses.

use serde::Serialize;

use crate::aqi::AqiResult;

// ---

/// Body of `GET /api/aqi`.
#[derive(Debug, Serialize)]
pub struct AqiResponse {
    pub primary_pollutant: &'static str,
    pub level: &'static str,
    pub aqi: i64,
}

impl From<AqiResult> for AqiResponse {
    fn from(result: AqiResult) -> Self {
        Self {
            primary_pollutant: result.primary_pollutant.as_str(),
            level: result.designation.as_str(),
            aqi: result.aqi,
        }
    }
}

/// Body of `GET /api/pm25s` and `GET /api/pm100s`.
#[derive(Debug, Serialize)]
pub struct PollutantResponse {
    pub pollutant: &'static str,
    pub ug_per_m3: f64,
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
