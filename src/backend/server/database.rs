/**
 * Database Connection
 *
 * Opens the SQLite pool and applies the embedded migrations from
 * `migrations/`. Foreign keys are enforced on every connection.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::server::config::ServerConfig;

/// Connect to the configured database and run migrations
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    tracing::info!("Connected to database with {} max connections", config.database_max_connections);

    Ok(pool)
}

/// Fresh, migrated in-memory database
///
/// Every in-memory SQLite connection is its own database, so the pool is
/// pinned to a single connection that never expires.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
