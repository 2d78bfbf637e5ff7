//! Authentication Handlers Module
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - POST /auth/signup
//! └── signin.rs   - POST /auth/signin
//! ```
//!
//! Neither route requires a bearer token.

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

pub use types::{Credentials, TokenResponse};

pub use signin::signin;
pub use signup::signup;
