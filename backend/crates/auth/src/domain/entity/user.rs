//! User Entity
//!
//! A registered user: credentials plus role.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, hashed_password::HashedPassword, name::Name, user_id::UserId,
    user_role::UserRole,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display and login name (unique)
    pub name: Name,
    /// Email used by sign-in (unique)
    pub email: Email,
    /// Argon2id password hash
    pub password_hash: HashedPassword,
    /// Role (User, Admin)
    pub user_role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        name: Name,
        email: Email,
        password_hash: HashedPassword,
        user_role: UserRole,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            user_role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if user may read survey results
    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }
}
