//! Backend Error Module
//!
//! - **`types`** - `ApiError` and its status mapping
//! - **`conversion`** - `IntoResponse` and extractor-rejection conversions
//!
//! Handlers return `Result<_, ApiError>`; the error renders itself as a JSON
//! body with a fixed status per kind.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
