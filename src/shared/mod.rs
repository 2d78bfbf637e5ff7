//! Shared Module
//!
//! Types and pure logic that do not depend on the server: the area predicate,
//! request/response payloads and payload validation errors.

/// Area predicate
pub mod area;

/// Login/registration payload
pub mod credentials;

/// Point check payloads
pub mod point;

/// Shared error types
pub mod error;

pub use area::{hit_shape, in_area, Shape};
pub use credentials::Credentials;
pub use error::SharedError;
pub use point::{PointRequest, PointResponse};
