//! Database schema management for the AQI service.
//!
//! Ensures required tables and indexes exist before serving requests.
//! Applied once on startup from `main.rs` (EMBP: single gateway call).

use anyhow::Result;
use sqlx::PgPool;

// ---

/// Create or update the database schema (idempotent).
///
/// Creates the `air_readings` table the trailing-window averages are computed
/// over. Safe to call on every startup; no-op if objects already exist.
///
/// Errors are propagated if any SQL execution fails.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    // Particulate readings the `/api/*` endpoints average over
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS air_readings (
            id          SERIAL PRIMARY KEY,
            recorded_at TIMESTAMPTZ      NOT NULL,
            pm25        DOUBLE PRECISION NOT NULL,
            pm100       DOUBLE PRECISION NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // The averaging query filters on the trailing window only
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_air_readings_recorded_at
            ON air_readings (recorded_at);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
