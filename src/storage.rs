//! Readings store collaborator.
//!
//! Owns the trailing-window averaging query the engine's inputs come from. The
//! store is injected into the route layer through [`ConcentrationSource`]
//! rather than held as process-global state, so the engine and routes never
//! know which database (or test stub) is behind it.

use std::future::Future;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

use crate::aqi::Pollutant;

// ---

/// The collaborator could not produce an averaged concentration. Transient;
/// the caller decides whether to retry or degrade.
#[derive(Debug, Error)]
pub enum DataUnavailableError {
    #[error("could not query readings store: {0}")]
    Query(#[from] sqlx::Error),

    #[error("no {0} readings in the trailing window")]
    Empty(Pollutant),
}

/// Anything that can answer "what was the mean concentration over the last
/// `window`?" for a pollutant.
pub trait ConcentrationSource {
    fn average_concentration(
        &self,
        pollutant: Pollutant,
        window: Duration,
    ) -> impl Future<Output = Result<f64, DataUnavailableError>> + Send;
}

// ---

/// Concentration source backed by the TimescaleDB `air_readings` hypertable.
#[derive(Clone)]
pub struct TimescaleStore {
    pool: PgPool,
}

impl TimescaleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ConcentrationSource for TimescaleStore {
    async fn average_concentration(
        &self,
        pollutant: Pollutant,
        window: Duration,
    ) -> Result<f64, DataUnavailableError> {
        // ---
        let column = match pollutant {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm100",
        };
        let cutoff = Utc::now() - window;

        debug!("Averaging {} readings since {}", pollutant, cutoff);

        // AVG over an empty window is NULL, which is a distinct condition from
        // a failed query.
        let average: Option<f64> = sqlx::query_scalar(&format!(
            "SELECT AVG({column}) FROM air_readings WHERE recorded_at > $1"
        ))
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await?;

        average.ok_or(DataUnavailableError::Empty(pollutant))
    }
}
