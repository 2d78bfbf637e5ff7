/**
 * Sample Repository
 *
 * Checked points are append-only. Each insert is one statement; listing
 * returns an account's samples in insertion order.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::PointResponse;

/// Sample row as stored in the `samples` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Sample {
    pub id: Uuid,
    /// Owning account
    pub account_id: Uuid,
    pub x: f64,
    pub y: f64,
    pub r: f64,
    /// Area check result
    pub inside: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Sample> for PointResponse {
    fn from(sample: Sample) -> Self {
        Self {
            x: sample.x,
            y: sample.y,
            r: sample.r,
            result: sample.inside,
            timestamp: sample.created_at,
        }
    }
}

/// Values for a sample about to be stored
#[derive(Debug, Clone, Copy)]
pub struct NewSample {
    pub account_id: Uuid,
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub inside: bool,
    pub created_at: DateTime<Utc>,
}

/// Persistence for samples
#[derive(Debug, Clone)]
pub struct PointRepository {
    pool: SqlitePool,
}

impl PointRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a sample
    ///
    /// Fails with a foreign-key database error if the account does not exist.
    pub async fn insert(&self, sample: NewSample) -> Result<Sample, sqlx::Error> {
        sqlx::query_as::<_, Sample>(
            r#"
            INSERT INTO samples (id, account_id, x, y, r, inside, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, account_id, x, y, r, inside, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(sample.account_id)
        .bind(sample.x)
        .bind(sample.y)
        .bind(sample.r)
        .bind(sample.inside)
        .bind(sample.created_at)
        .fetch_one(&self.pool)
        .await
    }

    /// All samples of an account, oldest first
    pub async fn list_by_owner(&self, account_id: Uuid) -> Result<Vec<Sample>, sqlx::Error> {
        sqlx::query_as::<_, Sample>(
            r#"
            SELECT id, account_id, x, y, r, inside, created_at
            FROM samples
            WHERE account_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
    }
}
