//! Authentication Module
//!
//! - **`passwords`** - salted bcrypt hashing
//! - **`sessions`** - JWT issuing and verification
//! - **`users`** - account model and repository
//! - **`service`** - signup/signin orchestration
//! - **`handlers`** - HTTP handlers for the `/auth` routes
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username and password -> account created -> token returned
//! 2. **Signin**: username and password -> credentials verified -> token returned
//! 3. **Protected routes**: bearer token -> signature verified -> account
//!    re-checked -> handler runs (see `crate::backend::middleware`)
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt and a per-account random salt
//! - Tokens are HS256 JWTs without expiry
//! - Passwords and tokens are never logged

pub mod handlers;
pub mod passwords;
pub mod service;
pub mod sessions;
pub mod users;

pub use handlers::{signin, signup};
pub use passwords::{PasswordHasher, Salt};
pub use service::AuthService;
pub use sessions::TokenService;
pub use users::{Account, UserRepository};
