//! Store client construction and repositories.
//!
//! The pool is created once at startup and injected into everything that
//! needs it (handlers receive it through `AppState`); there is no global
//! connection handle. Each repository operation is a single statement, so
//! the store's per-row atomicity is the only concurrency control in play.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Maximum number of pooled connections.
const MAX_CONNECTIONS: u32 = 20;

/// How long to wait for a free connection before giving up. Exhaustion
/// surfaces as `sqlx::Error::PoolTimedOut`, which the API layer maps to 503.
const ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from the embedded `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
