//! Backend Module
//!
//! The axum server: authentication, point checking, the request gateway and
//! server bootstrap.

pub mod auth;

pub mod error;

pub mod middleware;

pub mod points;

pub mod routes;

pub mod server;

pub use error::ApiError;
pub use server::{create_app, ServerConfig};
