/**
 * Server Initialization
 *
 * 1. Connect to the database and run migrations
 * 2. Build the application state
 * 3. Create the router
 */

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::database;
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database initialization failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("invalid password hashing setup: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

/// Connect to the configured database and build the application router
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing AreaCheck backend server");

    let pool = database::connect(&config).await?;
    create_app_with_pool(config, pool)
}

/// Build the application router over an existing pool
pub fn create_app_with_pool(config: ServerConfig, pool: SqlitePool) -> Result<Router<()>, InitError> {
    let app_state = AppState::new(config, pool)?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
