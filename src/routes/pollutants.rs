//! `GET /api/pm25s` and `GET /api/pm100s`: raw trailing-window averages.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use chrono::Duration;
use tracing::{error, info};

use crate::aqi::Pollutant;
use crate::routes::{aqi::internal_error, metrics};
use crate::storage::ConcentrationSource;
use crate::{Config, PollutantResponse};

// ---

pub fn router<S>() -> Router<(S, Config)>
where
    S: ConcentrationSource + Clone + Send + Sync + 'static,
{
    // ---
    Router::new()
        .route("/api/pm25s", get(pm25s::<S>))
        .route("/api/pm100s", get(pm100s::<S>))
}

async fn pm25s<S>(state: State<(S, Config)>) -> axum::response::Response
where
    S: ConcentrationSource + Clone + Send + Sync + 'static,
{
    serve_average(state, Pollutant::Pm25, "/api/pm25s").await
}

async fn pm100s<S>(state: State<(S, Config)>) -> axum::response::Response
where
    S: ConcentrationSource + Clone + Send + Sync + 'static,
{
    serve_average(state, Pollutant::Pm10, "/api/pm100s").await
}

/// Shared handler body: one pollutant's mean concentration over the window.
async fn serve_average<S>(
    State((store, config)): State<(S, Config)>,
    pollutant: Pollutant,
    endpoint: &'static str,
) -> axum::response::Response
where
    S: ConcentrationSource + Clone + Send + Sync + 'static,
{
    // ---
    info!("GET {}", endpoint);
    metrics::record_request(endpoint);

    let window = Duration::hours(i64::from(config.window_hours));

    match store.average_concentration(pollutant, window).await {
        Ok(ug_per_m3) => (
            StatusCode::OK,
            Json(PollutantResponse {
                pollutant: pollutant.as_str(),
                ug_per_m3,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to average {} readings: {}", pollutant, e);
            internal_error(e.to_string())
        }
    }
}
