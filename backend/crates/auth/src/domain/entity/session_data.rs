//! Session Data
//!
//! ログイン成功時に呼び出し元へ返す `{session_id, user_id, token}`。永続化はしない。
//! `session_id` は公開してよい検索キー、`token` は検証用の秘密値。

use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use kernel::id::LoginSessionId;

use crate::domain::value_object::{login_session_token::LoginSessionToken, user_id::UserId};

/// Session handle, owner and plaintext session token held by the caller
#[derive(Debug, Clone)]
pub struct SessionData {
    session_id: LoginSessionId,
    user_id: UserId,
    token: LoginSessionToken,
}

impl SessionData {
    pub fn new(
        session_id: LoginSessionId,
        user_id: UserId,
        token: LoginSessionToken,
    ) -> AppResult<Self> {
        if session_id.is_nil() {
            return Err(AppError::bad_request("Session id cannot be nil"));
        }
        if user_id.is_nil() {
            return Err(AppError::bad_request("Session user id cannot be nil"));
        }
        Ok(Self {
            session_id,
            user_id,
            token,
        })
    }

    /// Build from raw request strings
    pub fn parse(raw_session_id: &str, raw_user_id: &str, raw_token: &str) -> AppResult<Self> {
        let session_id = LoginSessionId::parse_str(raw_session_id)
            .map_app_err(ErrorKind::BadRequest, "Session id must be a UUID")?;
        let user_id = UserId::parse_str(raw_user_id)
            .map_app_err(ErrorKind::BadRequest, "Session user id must be a UUID")?;
        let token = LoginSessionToken::parse(raw_token)?;
        Self::new(session_id, user_id, token)
    }

    pub fn session_id(&self) -> LoginSessionId {
        self.session_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn token(&self) -> &LoginSessionToken {
        &self.token
    }
}
