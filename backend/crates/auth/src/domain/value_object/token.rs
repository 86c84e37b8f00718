//! Token Value Object
//!
//! ログイン結果として返す UUID 形式の公開ハンドル。
//! 発行されたログインセッションの ID をそのまま表す。

use kernel::error::app_error::{AppError, AppResult};
use kernel::id::LoginSessionId;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// UUID-shaped token handed back by login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(Uuid);

impl Token {
    /// Parse a token from client input
    pub fn parse(raw: impl AsRef<str>) -> AppResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AppError::bad_request("Token cannot be empty"));
        }

        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|e| AppError::bad_request("Token must be a UUID").with_source(e))
    }

    /// Generate a fresh random token
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<LoginSessionId> for Token {
    fn from(id: LoginSessionId) -> Self {
        Self(id.into_uuid())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_parse() {
        let uuid = Uuid::new_v4();
        let token = Token::parse(format!("  {}  ", uuid)).unwrap();
        assert_eq!(token.as_uuid(), &uuid);
        assert_eq!(token.to_string(), uuid.to_string());
    }

    #[test]
    fn test_token_invalid() {
        assert!(Token::parse("").is_err());
        assert!(Token::parse("   ").is_err());
        assert!(Token::parse("not-a-uuid").is_err());
    }

    #[test]
    fn test_token_from_session_id() {
        let id = LoginSessionId::new();
        assert_eq!(Token::from(id).as_uuid(), id.as_uuid());
    }

    #[test]
    fn test_generated_token_is_v4() {
        assert_eq!(Token::generate().as_uuid().get_version_num(), 4);
    }
}
