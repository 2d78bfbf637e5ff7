/**
 * Points Service
 *
 * Runs the area check for a submitted point, stores the result and serves
 * an account's history. Callers pass the username established by the
 * request gateway.
 */

use chrono::Utc;

use crate::backend::auth::users::{Account, UserRepository};
use crate::backend::error::ApiError;
use crate::backend::points::db::{NewSample, PointRepository};
use crate::shared::{area, PointRequest, PointResponse};

#[derive(Clone)]
pub struct PointsService {
    users: UserRepository,
    points: PointRepository,
}

impl PointsService {
    pub fn new(users: UserRepository, points: PointRepository) -> Self {
        Self { users, points }
    }

    /// Check a point for an account and store the result
    pub async fn submit(&self, username: &str, point: PointRequest) -> Result<PointResponse, ApiError> {
        let account = self.account(username).await?;

        let shape = area::hit_shape(point.x, point.y, point.r);
        let sample = self
            .points
            .insert(NewSample {
                account_id: account.id,
                x: point.x,
                y: point.y,
                r: point.r,
                inside: shape.is_some(),
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            "Point ({}, {}, r={}) for {}: {}",
            point.x,
            point.y,
            point.r,
            username,
            shape.map_or("outside", |s| s.name())
        );

        Ok(sample.into())
    }

    /// All checked points of an account, oldest first
    pub async fn list(&self, username: &str) -> Result<Vec<PointResponse>, ApiError> {
        let account = self.account(username).await?;
        let samples = self.points.list_by_owner(account.id).await?;
        tracing::debug!("Listing {} points for {}", samples.len(), username);

        Ok(samples.into_iter().map(PointResponse::from).collect())
    }

    async fn account(&self, username: &str) -> Result<Account, ApiError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or(ApiError::NotFound)
    }
}
