/**
 * API Routes
 *
 * ## Authentication (no token required)
 * - `POST /auth/signup` - User registration
 * - `POST /auth/signin` - User login
 *
 * ## Points (bearer token required)
 * - `GET /points` - Checked points of the caller
 * - `POST /points/check` - Check and store a point
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{signin, signup};
use crate::backend::points::{check_point, list_points};
use crate::backend::server::state::AppState;

pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
}

pub fn configure_points_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/points", get(list_points))
        .route("/points/check", post(check_point))
}

pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    configure_points_routes(configure_auth_routes(router))
}
