//! `GET /api/aqi`: the overall index for the trailing window.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use chrono::Duration;
use tracing::{error, info};

use crate::aqi::{current_aqi, ConcentrationReading, Pollutant};
use crate::routes::metrics;
use crate::storage::ConcentrationSource;
use crate::{AqiResponse, Config, ErrorResponse};

// ---

pub fn router<S>() -> Router<(S, Config)>
where
    S: ConcentrationSource + Clone + Send + Sync + 'static,
{
    // ---
    Router::new().route("/api/aqi", get(handler::<S>))
}

async fn handler<S>(State((store, config)): State<(S, Config)>) -> impl IntoResponse
where
    S: ConcentrationSource + Clone + Send + Sync + 'static,
{
    // ---
    info!("GET /api/aqi");
    metrics::record_request("/api/aqi");

    let window = Duration::hours(i64::from(config.window_hours));

    // Every failure below is terminal for the request: one error body, no
    // partially populated 200.
    let pm25 = match store.average_concentration(Pollutant::Pm25, window).await {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to average PM2.5 readings: {}", e);
            return internal_error(e.to_string());
        }
    };

    let pm100 = match store.average_concentration(Pollutant::Pm10, window).await {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to average PM10 readings: {}", e);
            return internal_error(e.to_string());
        }
    };

    let readings = [
        ConcentrationReading::new(Pollutant::Pm25, pm25),
        ConcentrationReading::new(Pollutant::Pm10, pm100),
    ];

    let result = match current_aqi(&readings) {
        Ok(result) => result,
        Err(e) => {
            error!("AQI computation failed: {}", e);
            return internal_error(e.to_string());
        }
    };

    info!(
        "Current AQI {} ({}, {})",
        result.aqi, result.primary_pollutant, result.designation
    );
    (StatusCode::OK, Json(AqiResponse::from(result))).into_response()
}

pub(super) fn internal_error(message: String) -> axum::response::Response {
    // ---
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}
