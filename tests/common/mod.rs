//! Common test utilities and helpers
//!
//! - Database fixtures
//! - In-process server driver
//! - Authentication helpers
//! - Assertion macros
#![allow(dead_code)]

pub mod auth_helpers;

pub use auth_helpers::*;
pub use database::*;
pub use server::*;
