//! Login Session Token
//!
//! ログイン時に生成される不透明なランダム秘密値と、その一方向ハッシュ。
//!
//! - 平文トークンは 32 バイトの CSPRNG 出力を base64url（パディングなし）で表現
//! - サーバー側には Argon2id ハッシュのみ保存し、平文は呼び出し元にだけ返す

use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use platform::crypto;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Decoded length of a login session token
pub const LOGIN_SESSION_TOKEN_BYTES: usize = 32;

// ============================================================================
// Plaintext token
// ============================================================================

/// Plaintext login session token (base64url, no padding)
///
/// No `PartialEq`: tokens are only ever checked against their stored hash.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct LoginSessionToken(String);

impl LoginSessionToken {
    /// Generate a new token from the OS random source
    pub fn generate() -> Self {
        let mut bytes = crypto::random_bytes(LOGIN_SESSION_TOKEN_BYTES);
        let encoded = crypto::to_base64url(&bytes);
        bytes.zeroize();
        Self(encoded)
    }

    /// Parse a token presented by a caller
    ///
    /// The value must decode to exactly [`LOGIN_SESSION_TOKEN_BYTES`] bytes.
    pub fn parse(raw: impl AsRef<str>) -> AppResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AppError::bad_request("Session token cannot be empty"));
        }

        let mut decoded = crypto::from_base64url(trimmed)
            .map_app_err(ErrorKind::BadRequest, "Malformed session token")?;
        let len = decoded.len();
        decoded.zeroize();

        if len != LOGIN_SESSION_TOKEN_BYTES {
            return Err(AppError::bad_request("Malformed session token"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Hash the token for storage
    pub fn hash(&self) -> AppResult<HashedLoginSessionToken> {
        crypto::hash_secret(self.0.as_bytes())
            .map(HashedLoginSessionToken)
            .map_app_err(ErrorKind::InternalServerError, "Session token hashing failed")
    }

    /// Plaintext form, only for handing back to the caller
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LoginSessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LoginSessionToken")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed token
// ============================================================================

/// One-way hash of a [`LoginSessionToken`] (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedLoginSessionToken(String);

impl HashedLoginSessionToken {
    /// Restore from a persisted PHC string
    pub fn from_db(phc: impl Into<String>) -> AppResult<Self> {
        let phc = phc.into();
        if phc.trim().is_empty() {
            return Err(AppError::internal("Stored session token hash is empty"));
        }
        crypto::validate_phc(&phc).map_app_err(
            ErrorKind::InternalServerError,
            "Stored session token hash is malformed",
        )?;
        Ok(Self(phc))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time check of a presented token
    pub fn verify(&self, token: &LoginSessionToken) -> bool {
        crypto::verify_secret(token.0.as_bytes(), &self.0)
    }
}

impl fmt::Debug for HashedLoginSessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashedLoginSessionToken")
            .field(&"[HASH]")
            .finish()
    }
}
