//! Points Module
//!
//! - **`db`** - sample model and repository
//! - **`service`** - area check, storage and history
//! - **`handlers`** - HTTP handlers for the `/points` routes

pub mod db;
pub mod handlers;
pub mod service;

pub use db::{PointRepository, Sample};
pub use handlers::{check_point, list_points};
pub use service::PointsService;
