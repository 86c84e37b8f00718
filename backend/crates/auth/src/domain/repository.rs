//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::LoginSessionId;

use crate::domain::entity::{login_session::LoginSession, user::User};
use crate::domain::value_object::{email::Email, name::Name, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by name
    async fn find_by_name(&self, name: &Name) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}

/// Login session repository trait
#[trait_variant::make(LoginSessionRepository: Send)]
pub trait LocalLoginSessionRepository {
    /// Persist a newly issued session
    async fn save(&self, session: &LoginSession) -> AuthResult<()>;

    /// Find a session by its public id, expired or not
    async fn find_by_session_id(&self, session_id: &LoginSessionId) -> AuthResult<Option<LoginSession>>;

    /// Delete a session
    async fn delete_by_id(&self, session_id: &LoginSessionId) -> AuthResult<()>;

    /// Delete every session expired at `now`, returning how many were removed
    async fn delete_expired(&self, now: DateTime<Utc>) -> AuthResult<u64>;
}
