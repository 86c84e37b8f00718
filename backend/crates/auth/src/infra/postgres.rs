//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppError;
use kernel::id::LoginSessionId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{login_session::LoginSession, user::User};
use crate::domain::repository::{LoginSessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, hashed_password::HashedPassword, login_session_token::HashedLoginSessionToken,
    name::Name, user_id::UserId, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_user_where(&self, column: &'static str, value: &str) -> AuthResult<Option<User>> {
        let sql = format!(
            r#"
            SELECT
                id,
                user_name,
                email,
                password_hash,
                user_role,
                created_at,
                updated_at
            FROM users
            WHERE {column} = $1
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

/// A stored row that no longer satisfies the domain invariants
fn corrupt_row(what: &'static str) -> impl FnOnce(AppError) -> AuthError {
    move |e| AuthError::Internal(format!("Invalid {what} in storage: {}", e.message()))
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id,
                user_name,
                email,
                password_hash,
                user_role,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.user_role.code())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                user_name,
                email,
                password_hash,
                user_role,
                created_at,
                updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_name(&self, name: &Name) -> AuthResult<Option<User>> {
        self.find_user_where("user_name", name.as_str()).await
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.find_user_where("email", email.as_str()).await
    }
}

// ============================================================================
// Login Session Repository Implementation
// ============================================================================

impl LoginSessionRepository for PgAuthRepository {
    async fn save(&self, session: &LoginSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO login_sessions (
                id,
                user_id,
                token_hash,
                created_at,
                expires_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.user_id().as_uuid())
        .bind(session.token_hash().as_str())
        .bind(session.created_at())
        .bind(session.expires_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // Expired rows are returned too; the caller decides and deletes them.
    async fn find_by_session_id(&self, session_id: &LoginSessionId) -> AuthResult<Option<LoginSession>> {
        let row = sqlx::query_as::<_, LoginSessionRow>(
            r#"
            SELECT
                id,
                user_id,
                token_hash,
                created_at,
                expires_at
            FROM login_sessions
            WHERE id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_session()).transpose()
    }

    async fn delete_by_id(&self, session_id: &LoginSessionId) -> AuthResult<()> {
        sqlx::query("DELETE FROM login_sessions WHERE id = $1")
            .bind(session_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM login_sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired login sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    user_name: String,
    email: String,
    password_hash: String,
    user_role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            user_id: UserId::from_uuid(self.id),
            name: Name::new(&self.user_name).map_err(corrupt_row("user_name"))?,
            email: Email::new(&self.email).map_err(corrupt_row("email"))?,
            password_hash: HashedPassword::from_db(self.password_hash)
                .map_err(corrupt_row("password_hash"))?,
            user_role: UserRole::from_code(&self.user_role).map_err(corrupt_row("user_role"))?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LoginSessionRow {
    id: Uuid,
    user_id: Uuid,
    token_hash: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl LoginSessionRow {
    fn into_session(self) -> AuthResult<LoginSession> {
        let token_hash =
            HashedLoginSessionToken::from_db(self.token_hash).map_err(corrupt_row("token_hash"))?;

        LoginSession::from_persistence(
            LoginSessionId::from_uuid(self.id),
            UserId::from_uuid(self.user_id),
            token_hash,
            self.created_at,
            self.expires_at,
        )
        .map_err(corrupt_row("login_session"))
    }
}
