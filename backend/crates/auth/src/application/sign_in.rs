//! Sign In Use Case
//!
//! Authenticates any user by name, email and password and issues a login
//! session.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::application::session::issue_login_session;
use crate::application::timing::burn_password_check;
use crate::domain::entity::{session_data::SessionData, sign_in_credential::SignInCredential};
use crate::domain::repository::{LoginSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: LoginSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: LoginSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SessionData> {
        let credential = SignInCredential::new(&input.name, &input.email, input.password)?;
        let pepper = self.config.pepper();

        let Some(user) = self.user_repo.find_by_email(credential.email()).await? else {
            burn_password_check(credential.password(), pepper);
            return Err(AuthError::InvalidCredentials);
        };

        // Verify before comparing names so both failures cost one hash
        let password_ok = user.password_hash.verify(credential.password(), pepper);
        if !password_ok || user.name != *credential.name() {
            return Err(AuthError::InvalidCredentials);
        }

        let (session, session_data) =
            issue_login_session(self.session_repo.as_ref(), user.user_id, Utc::now()).await?;

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.id(),
            "User signed in"
        );

        Ok(session_data)
    }
}
