//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, SignInInput, SignInUseCase};
use crate::domain::repository::{LoginSessionRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, SessionDataDto, SignInRequest};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + LoginSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + LoginSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            name: req.name,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse::from(output)))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/sign-in
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<SessionDataDto>>
where
    R: UserRepository + LoginSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let session = use_case
        .execute(SignInInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(SessionDataDto::from(&session)))
}
