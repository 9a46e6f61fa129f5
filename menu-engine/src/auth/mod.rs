//! Admin gate
//!
//! Admin mode is a capability check behind [`AdminGate`]. The engine never
//! stores a plaintext secret; [`PasswordGate`] verifies against an Argon2
//! PHC string (`$argon2id$v=19$...`) taken from configuration.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use shared::error::AppError;

/// Decides whether a secret unlocks admin mode
pub trait AdminGate: Send + Sync {
    fn verify(&self, secret: &str) -> bool;
}

/// Verifies against an Argon2 hash
#[derive(Clone)]
pub struct PasswordGate {
    hash: String,
}

impl std::fmt::Debug for PasswordGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordGate").field("hash", &"<redacted>").finish()
    }
}

impl PasswordGate {
    /// Build from a PHC string; rejects anything that does not parse
    pub fn from_phc(hash: impl Into<String>) -> Result<Self, AppError> {
        let hash = hash.into();
        PasswordHash::new(&hash)
            .map_err(|e| AppError::config(format!("Invalid admin password hash: {e}")))?;
        Ok(Self { hash })
    }
}

impl AdminGate for PasswordGate {
    fn verify(&self, secret: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Gate used when no admin secret is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAllGate;

impl AdminGate for DenyAllGate {
    fn verify(&self, _secret: &str) -> bool {
        false
    }
}

/// Hash an admin secret into a PHC string for `ADMIN_PASSWORD_HASH`
pub fn hash_secret(secret: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash secret: {e}")))
}
