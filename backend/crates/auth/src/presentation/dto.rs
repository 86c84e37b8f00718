//! API DTOs (Data Transfer Objects)
//!
//! Field names are the wire contract shared with the survey frontend.

use serde::{Deserialize, Serialize};

use crate::application::LoginOutput;
use crate::domain::entity::session_data::SessionData;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// UUID handle of the issued session
    pub token: String,
    pub session: SessionDataDto,
}

impl From<LoginOutput> for LoginResponse {
    fn from(output: LoginOutput) -> Self {
        Self {
            token: output.token.to_string(),
            session: SessionDataDto::from(&output.session),
        }
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
pub struct SignInRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Session Data
// ============================================================================

/// `{session_id, user_id, token}` as sent to and received from callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionDataDto {
    pub session_id: String,
    pub user_id: String,
    pub token: String,
}

impl From<&SessionData> for SessionDataDto {
    fn from(data: &SessionData) -> Self {
        Self {
            session_id: data.session_id().to_string(),
            user_id: data.user_id().to_string(),
            token: data.token().expose().to_string(),
        }
    }
}
