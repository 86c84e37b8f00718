//! Login Use Case
//!
//! Authenticates the administrator by name and password and issues a
//! login session.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::application::session::issue_login_session;
use crate::application::timing::burn_password_check;
use crate::domain::entity::{admin_credential::AdminCredential, session_data::SessionData};
use crate::domain::repository::{LoginSessionRepository, UserRepository};
use crate::domain::value_object::token::Token;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub name: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Public UUID handle of the issued session
    pub token: Token,
    /// Secret payload the caller presents on later requests
    pub session: SessionData,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: LoginSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let credential = AdminCredential::new(&input.name, input.password)?;
        let pepper = self.config.pepper();

        let Some(user) = self.user_repo.find_by_name(credential.name()).await? else {
            burn_password_check(credential.password(), pepper);
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(credential.password(), pepper) {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_admin() {
            tracing::warn!(user_id = %user.user_id, "Login attempted by non-admin user");
            return Err(AuthError::InvalidCredentials);
        }

        let (session, session_data) =
            issue_login_session(self.session_repo.as_ref(), user.user_id, Utc::now()).await?;

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.id(),
            "Admin logged in"
        );

        Ok(LoginOutput {
            token: Token::from(session.id()),
            session: session_data,
        })
    }
}
