//! Verify Session Use Case
//!
//! Resolves a caller's `SessionData` to the stored login session, enforcing
//! expiry. Expired sessions are deleted on a best-effort basis.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entity::{login_session::LoginSession, session_data::SessionData};
use crate::domain::repository::LoginSessionRepository;
use crate::error::{AuthError, AuthResult};

/// Verify session use case
pub struct VerifySessionUseCase<S>
where
    S: LoginSessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> VerifySessionUseCase<S>
where
    S: LoginSessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self, session_data: &SessionData) -> AuthResult<LoginSession> {
        self.execute_at(session_data, Utc::now()).await
    }

    /// Verify against an explicit clock reading
    pub async fn execute_at(
        &self,
        session_data: &SessionData,
        now: DateTime<Utc>,
    ) -> AuthResult<LoginSession> {
        let session = self
            .session_repo
            .find_by_session_id(&session_data.session_id())
            .await?
            .filter(|session| session.user_id() == session_data.user_id())
            .ok_or(AuthError::SessionInvalid)?;

        // Exactly one slow hash per request, whatever the user holds
        if !session.verify(session_data.token()) {
            return Err(AuthError::SessionInvalid);
        }

        if session.is_expired(now) {
            if let Err(e) = self.session_repo.delete_by_id(&session.id()).await {
                tracing::warn!(
                    session_id = %session.id(),
                    error = %e,
                    "Failed to delete expired login session"
                );
            }
            return Err(AuthError::SessionExpired);
        }

        Ok(session)
    }
}
