//! Authorize Admin Use Case
//!
//! Session verification followed by a role check. Gates reads of survey
//! results.

use std::sync::Arc;

use crate::application::verify_session::VerifySessionUseCase;
use crate::domain::entity::{session_data::SessionData, user::User};
use crate::domain::repository::{LoginSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Authorize admin use case
pub struct AuthorizeAdminUseCase<U, S>
where
    U: UserRepository,
    S: LoginSessionRepository,
{
    user_repo: Arc<U>,
    verify_session: VerifySessionUseCase<S>,
}

impl<U, S> AuthorizeAdminUseCase<U, S>
where
    U: UserRepository,
    S: LoginSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>) -> Self {
        Self {
            user_repo,
            verify_session: VerifySessionUseCase::new(session_repo),
        }
    }

    pub async fn execute(&self, session_data: &SessionData) -> AuthResult<User> {
        let session = self.verify_session.execute(session_data).await?;

        // A session whose user has vanished is treated like an unknown session
        let user = self
            .user_repo
            .find_by_id(&session.user_id())
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if !user.is_admin() {
            return Err(AuthError::Forbidden);
        }

        Ok(user)
    }
}
