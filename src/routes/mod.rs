use axum::Router;

use crate::storage::ConcentrationSource;
use crate::Config;

mod aqi;
mod health;
mod metrics;
mod pollutants;

// ---

pub fn router<S>(store: S, config: Config) -> Router
where
    S: ConcentrationSource + Clone + Send + Sync + 'static,
{
    // ---
    Router::new()
        .merge(aqi::router())
        .merge(pollutants::router())
        .merge(health::router())
        .merge(metrics::router())
        .with_state((store, config))
}
