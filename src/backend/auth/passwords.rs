/**
 * Password Hashing
 *
 * Salted bcrypt with the salt stored next to the digest. `hash` is a pure
 * function of (password, salt, cost), so `verify` can recompute the digest
 * from the stored salt and compare.
 *
 * # Security
 *
 * - Salts are 16 bytes from the OS random generator
 * - Digests are compared in constant time
 * - Passwords longer than 72 bytes are refused instead of being cut short,
 *   so two passwords sharing a 72-byte prefix never collide
 */

use bcrypt::{non_truncating_hash_with_salt, BcryptError, Version};

/// Salt length in bytes (fixed by bcrypt)
pub const SALT_LEN: usize = 16;

/// Smallest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Largest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Random salt for one account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    /// Draw a fresh salt from the OS random generator
    pub fn generate() -> Result<Self, getrandom::Error> {
        let mut bytes = [0u8; SALT_LEN];
        getrandom::fill(&mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}

impl From<[u8; SALT_LEN]> for Salt {
    fn from(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Salt {
    type Error = usize;

    /// Fails with the actual length when the slice is not [`SALT_LEN`] bytes
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; SALT_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| bytes.len())
    }
}

/// Salted bcrypt hasher with a fixed cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher, rejecting costs bcrypt cannot use
    pub fn new(cost: u32) -> Result<Self, BcryptError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(BcryptError::CostNotAllowed(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Produce a fresh salt
    pub fn generate_salt(&self) -> Result<Salt, getrandom::Error> {
        Salt::generate()
    }

    /// Hash a password with the given salt
    ///
    /// Returns a `$2b$` formatted digest. The same inputs always yield the
    /// same digest. Fails with [`BcryptError::Truncation`] for passwords over
    /// 72 bytes.
    pub fn hash(&self, password: &str, salt: &Salt) -> Result<String, BcryptError> {
        let parts = non_truncating_hash_with_salt(password, self.cost, *salt.as_bytes())?;
        Ok(parts.format_for_version(Version::TwoB))
    }

    /// Check a candidate password against a stored (salt, digest) pair
    pub fn verify(&self, password: &str, salt: &Salt, digest: &str) -> Result<bool, BcryptError> {
        let candidate = match self.hash(password, salt) {
            Ok(candidate) => candidate,
            // No stored digest can come from a password this long.
            Err(BcryptError::Truncation(_)) => return Ok(false),
            Err(e) => return Err(e),
        };
        Ok(constant_time_eq(candidate.as_bytes(), digest.as_bytes()))
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
