//! Points HTTP Handlers
//!
//! Both routes require a bearer token; the `AuthUser` extractor rejects the
//! request before the body is read if the token or its account is invalid.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::points::service::PointsService;
use crate::shared::{PointRequest, PointResponse};

/// `GET /points`: the caller's checked points, oldest first
pub async fn list_points(
    State(points): State<PointsService>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<PointResponse>>, ApiError> {
    let history = points.list(&user.username).await?;
    Ok(Json(history))
}

/// `POST /points/check`: check a point and store the result
pub async fn check_point(
    State(points): State<PointsService>,
    AuthUser(user): AuthUser,
    payload: Result<Json<PointRequest>, JsonRejection>,
) -> Result<Json<PointResponse>, ApiError> {
    let Json(point) = payload?;
    let checked = points.submit(&user.username, point).await?;
    Ok(Json(checked))
}
