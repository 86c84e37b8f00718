//! Login Session Entity
//!
//! サーバー側に保存されるログインセッション。平文トークンは保持せず、
//! ハッシュのみを持つ。
//!
//! ## 状態遷移
//! Issued → Valid（`now < expires_at` の間）→ Expired（検出時に削除）→ Deleted
//!
//! 更新・延長の遷移は存在しない。期限切れ後は再ログインが必要。

use chrono::{DateTime, Duration, Utc};
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::LoginSessionId;

use crate::domain::value_object::{
    login_session_token::{HashedLoginSessionToken, LoginSessionToken},
    user_id::UserId,
};

/// Lifetime of a login session
pub const LOGIN_SESSION_TTL_MINUTES: i64 = 30;

/// Login session TTL as a duration
pub fn login_session_ttl() -> Duration {
    Duration::minutes(LOGIN_SESSION_TTL_MINUTES)
}

/// Login session entity
#[derive(Debug, Clone)]
pub struct LoginSession {
    id: LoginSessionId,
    user_id: UserId,
    token_hash: HashedLoginSessionToken,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl LoginSession {
    /// Issue a new session at `issued_at`, expiring after the fixed TTL
    pub fn issue(
        user_id: UserId,
        token_hash: HashedLoginSessionToken,
        issued_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        if user_id.is_nil() {
            return Err(AppError::bad_request("Login session requires a user"));
        }

        Ok(Self {
            id: LoginSessionId::new(),
            user_id,
            token_hash,
            created_at: issued_at,
            expires_at: issued_at + login_session_ttl(),
        })
    }

    /// Rebuild a session from storage, re-checking its invariants
    pub fn from_persistence(
        id: LoginSessionId,
        user_id: UserId,
        token_hash: HashedLoginSessionToken,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        if id.is_nil() || user_id.is_nil() {
            return Err(AppError::internal("Login session has a nil identifier"));
        }

        if created_at.timestamp() == 0 || expires_at.timestamp() == 0 {
            return Err(AppError::internal("Login session has unset timestamps"));
        }

        if expires_at <= created_at {
            return Err(AppError::internal(
                "Login session expires before it was created",
            ));
        }

        Ok(Self {
            id,
            user_id,
            token_hash,
            created_at,
            expires_at,
        })
    }

    pub fn id(&self) -> LoginSessionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn token_hash(&self) -> &HashedLoginSessionToken {
        &self.token_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Expired from the expiry instant onwards
    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        at >= self.expires_at
    }

    /// Check a presented plaintext token against the stored hash
    pub fn verify(&self, token: &LoginSessionToken) -> bool {
        self.token_hash.verify(token)
    }
}
