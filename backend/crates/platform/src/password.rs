//! Passwords
//!
//! Clear text is normalized and policy-checked once, lives in zeroized
//! memory, and is only ever turned into an Argon2id PHC string.

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::{self, SecretHashError};

/// Upper bound in Unicode code points, after normalization
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Control characters other than tab
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

fn check_policy(password: &str) -> Result<(), PasswordPolicyError> {
    if password.is_empty() {
        return Err(PasswordPolicyError::EmptyOrWhitespace);
    }

    let actual = password.chars().count();
    if actual > MAX_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooLong {
            max: MAX_PASSWORD_LENGTH,
            actual,
        });
    }

    if password.chars().any(|ch| ch.is_control() && ch != '\t') {
        return Err(PasswordPolicyError::InvalidCharacter);
    }

    Ok(())
}

/// Validated clear text password, wiped from memory on drop
///
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("secret".to_string()).unwrap();
/// let hashed = password.hash(None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// NFKC-normalize, trim, then apply the policy
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let raw = Zeroizing::new(raw);
        let normalized = Zeroizing::new(raw.nfkc().collect::<String>());
        let trimmed = Zeroizing::new(normalized.trim().to_string());

        check_policy(&trimmed)?;
        Ok(Self(trimmed.as_str().to_owned()))
    }

    /// Password bytes with the pepper appended
    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.0.as_bytes().to_vec());
        bytes.extend_from_slice(pepper.unwrap_or_default());
        bytes
    }

    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, SecretHashError> {
        let phc = crypto::hash_secret(&self.peppered(pepper))?;
        Ok(HashedPassword(phc))
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClearTextPassword([REDACTED])")
    }
}

/// Argon2id PHC string of a password
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Load a stored PHC string
    pub fn from_phc_string(phc: impl Into<String>) -> Result<Self, SecretHashError> {
        let phc = phc.into();
        crypto::validate_phc(&phc)?;
        Ok(Self(phc))
    }

    pub fn as_phc_string(&self) -> &str {
        &self.0
    }

    /// The pepper must be the one used when hashing
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        crypto::verify_secret(&password.peppered(pepper), &self.0)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword([HASH])")
    }
}
