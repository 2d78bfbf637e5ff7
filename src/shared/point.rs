//! Point payloads
//!
//! `PointRequest` is what a client submits for checking; `PointResponse` is the
//! stored sample as returned by both the check and the history endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point submitted for an area check
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PointRequest {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// Checked point with its result
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PointResponse {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    /// Whether the point lies inside the area
    pub result: bool,
    /// When the point was checked (RFC 3339, UTC)
    pub timestamp: DateTime<Utc>,
}
