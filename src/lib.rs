//! AreaCheck - Main Library
//!
//! Authenticated backend for checking whether points fall inside a fixed
//! geometric area. Registered users submit `(x, y, r)` samples; each one is
//! checked, stored with a timestamp and returned in the user's history.
//!
//! # Module Structure
//!
//! - **`shared`** - Server-independent types and logic
//!   - The area predicate (circle, rectangle and triangle)
//!   - Request/response payloads and their validation
//!
//! - **`backend`** - The axum server
//!   - Signup/signin with salted bcrypt and non-expiring JWTs
//!   - Bearer-token gateway for protected routes
//!   - SQLite persistence through sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use areacheck::backend::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # HTTP API
//!
//! | Method | Path            | Auth   | Body              | Response                         |
//! |--------|-----------------|--------|-------------------|----------------------------------|
//! | POST   | `/auth/signup`  | -      | `{username, password}` | `{token}`                   |
//! | POST   | `/auth/signin`  | -      | `{username, password}` | `{token}`                   |
//! | GET    | `/points`       | Bearer | -                 | `[{x, y, r, result, timestamp}]` |
//! | POST   | `/points/check` | Bearer | `{x, y, r}`       | `{x, y, r, result, timestamp}`   |
//!
//! # Error Handling
//!
//! Handlers return [`backend::ApiError`], which renders as
//! `{"error": ..., "status": ...}` with a fixed status per error kind.

/// Shared types and area predicate
pub mod shared;

/// Backend server-side code
pub mod backend;
