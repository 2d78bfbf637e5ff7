//! Routes Module
//!
//! - **`api_routes`** - route table for the auth and points endpoints
//! - **`router`** - assembles the full router with layers and fallback

pub mod router;

pub mod api_routes;

pub use router::create_router;
