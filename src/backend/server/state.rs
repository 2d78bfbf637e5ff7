/**
 * Application State
 *
 * `AppState` holds the services every handler needs. All members are cheap to
 * clone (they share one connection pool), and the `FromRef` impls let
 * handlers extract just the service they use.
 *
 * # Example
 *
 * ```rust,no_run
 * use areacheck::backend::points::PointsService;
 * use axum::extract::State;
 *
 * async fn handler(State(points): State<PointsService>) {
 *     let _ = points.list("alice12").await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::{AuthService, PasswordHasher, TokenService, UserRepository};
use crate::backend::points::{PointRepository, PointsService};
use crate::backend::server::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,

    pub auth: AuthService,

    pub points: PointsService,

    /// Used by the gateway to verify bearer tokens
    pub tokens: TokenService,

    /// Used by the gateway to re-check that a token's account exists
    pub users: UserRepository,
}

impl AppState {
    /// Wire the services over an open, migrated pool
    pub fn new(config: ServerConfig, pool: SqlitePool) -> Result<Self, bcrypt::BcryptError> {
        let hasher = PasswordHasher::new(config.bcrypt_cost)?;
        let tokens = TokenService::new(config.jwt_secret.as_bytes());
        let users = UserRepository::new(pool.clone());
        let points = PointRepository::new(pool);

        Ok(Self {
            auth: AuthService::new(users.clone(), hasher, tokens.clone()),
            points: PointsService::new(users.clone(), points),
            tokens,
            users,
            config: Arc::new(config),
        })
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for PointsService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.points.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
