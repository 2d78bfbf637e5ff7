/**
 * Account Model and Repository
 *
 * Accounts are written once at signup and never updated or deleted. Every
 * operation here is a single statement, so each is atomic on its own;
 * username uniqueness is backed by a UNIQUE constraint.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Account row as stored in the `accounts` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID)
    pub id: Uuid,
    /// Username (unique, at least 5 chars)
    pub username: String,
    /// bcrypt digest of the password
    pub password_hash: String,
    /// Salt the digest was computed with
    pub salt: Vec<u8>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Persistence for accounts
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account
    ///
    /// Fails with a unique-violation database error if the username is taken.
    pub async fn insert(
        &self,
        username: &str,
        password_hash: &str,
        salt: &[u8],
    ) -> Result<Account, sqlx::Error> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, username, password_hash, salt, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, username, password_hash, salt, created_at
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(password_hash)
        .bind(salt)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    /// Get account by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, username, password_hash, salt, created_at
            FROM accounts
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    /// Check whether a username is registered
    pub async fn exists_by_username(&self, username: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
