//! Password Value Objects
//!
//! Domain wrappers around `platform::password` for cryptographic operations.
//!
//! - [`RawPassword`]: validated clear text from a request, zeroized on drop
//! - [`HashedPassword`]: Argon2id PHC string loaded from or written to storage
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::hashed_password::{HashedPassword, RawPassword};
//!
//! let raw = RawPassword::new("secret".to_string()).unwrap();
//! let hashed = HashedPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use platform::password::{
    ClearTextPassword, HashedPassword as PhcHash, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Validation Rules
    /// - Unicode NFKC normalized, surrounding whitespace trimmed
    /// - Not empty
    /// - Maximum 128 characters
    /// - No control characters
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "Password must be at most {} characters (got {})",
                max, actual
            ))
            .with_action("Please choose a shorter password"),

            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }

            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
                    .with_action("Please remove any special control characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Hashed Password (for storage)
// ============================================================================

/// Hashed user password in Argon2id PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(PhcHash);

impl HashedPassword {
    /// Hash a raw password
    ///
    /// ## Arguments
    /// * `raw` - The validated raw password
    /// * `pepper` - Optional application-wide secret
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        raw.inner()
            .hash(pepper)
            .map(Self)
            .map_app_err(ErrorKind::InternalServerError, "Password hashing failed")
    }

    /// Restore from a persisted PHC string
    pub fn from_db(phc: impl Into<String>) -> AppResult<Self> {
        let phc = phc.into();
        if phc.trim().is_empty() {
            return Err(AppError::internal("Stored password hash is empty"));
        }

        PhcHash::from_phc_string(phc)
            .map(Self)
            .map_app_err(ErrorKind::InternalServerError, "Stored password hash is malformed")
    }

    /// PHC string for storage
    pub fn as_str(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time verification against a raw password
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashedPassword").field(&"[HASH]").finish()
    }
}
