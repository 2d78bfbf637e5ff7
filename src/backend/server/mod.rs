//! Server Module
//!
//! - **`config`** - configuration loading and validation
//! - **`database`** - pool creation and migrations
//! - **`state`** - shared application state
//! - **`init`** - wiring everything into a router

pub mod config;

pub mod database;

pub mod state;

pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, create_app_with_pool, InitError};
pub use state::AppState;
