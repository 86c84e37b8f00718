//! Provision Admin Use Case
//!
//! Creates the administrator account at startup when it does not exist yet.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{admin_credential::AdminCredential, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::AuthResult;

/// Provision admin input
pub struct ProvisionAdminInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Provision admin use case
pub struct ProvisionAdminUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ProvisionAdminUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Returns `true` when a new admin was created
    pub async fn execute(&self, input: ProvisionAdminInput) -> AuthResult<bool> {
        let credential = AdminCredential::new(&input.name, input.password)?;
        let email = Email::new(&input.email)?;

        if self.user_repo.find_by_name(credential.name()).await?.is_some() {
            tracing::info!(name = %credential.name(), "Admin user already exists");
            return Ok(false);
        }

        if self.user_repo.find_by_email(&email).await?.is_some() {
            tracing::warn!(email = %email, "Admin email already belongs to another user");
            return Ok(false);
        }

        let password_hash = credential.hash(self.config.pepper())?;
        let user = User::new(
            credential.name().clone(),
            email,
            password_hash,
            UserRole::Admin,
        );

        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "Admin user provisioned");
        Ok(true)
    }
}
