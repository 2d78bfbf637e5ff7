/**
 * Authentication Handler Types
 *
 * Signup and signin both take `Credentials` (see `crate::shared`) and answer
 * with a `TokenResponse`.
 */

use serde::{Deserialize, Serialize};

pub use crate::shared::Credentials;

/// Token response
///
/// Returned by signup and signin. The token goes into
/// `Authorization: Bearer <token>` on every protected request.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}
