//! Cryptographic Utilities

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};
use thiserror::Error;

/// Secret hashing errors
#[derive(Debug, Error)]
pub enum SecretHashError {
    /// Hashing operation failed
    #[error("Secret hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid secret hash format")]
    InvalidHashFormat,
}

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encode bytes as URL-safe base64 without padding
pub fn to_base64url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode URL-safe base64 without padding
pub fn from_base64url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

/// Hash a secret with Argon2id and a fresh random salt
///
/// Returns the PHC string (algorithm, parameters, salt and digest).
pub fn hash_secret(secret: &[u8]) -> Result<String, SecretHashError> {
    let salt = SaltString::generate(OsRng);

    // OWASP recommended Argon2id parameters:
    // m=19456 (19 MiB), t=2, p=1
    let hash = Argon2::default()
        .hash_password(secret, &salt)
        .map_err(|e| SecretHashError::HashingFailed(e.to_string()))?;

    Ok(hash.to_string())
}

/// Check that a PHC string parses as a password hash
pub fn validate_phc(phc: &str) -> Result<(), SecretHashError> {
    PasswordHash::new(phc)
        .map(|_| ())
        .map_err(|_| SecretHashError::InvalidHashFormat)
}

/// Verify a secret against a PHC string
///
/// Argon2 compares digests in constant time. Malformed hashes never verify.
pub fn verify_secret(secret: &[u8], phc: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(phc) else {
        return false;
    };
    Argon2::default().verify_password(secret, &parsed).is_ok()
}
