//! Middleware Module
//!
//! Request processing that runs before handlers:
//!
//! - **`auth`** - bearer-token gateway for protected routes

pub mod auth;

pub use auth::{bearer_token, AuthUser, AuthenticatedUser};
