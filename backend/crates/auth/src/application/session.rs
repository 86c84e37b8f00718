//! Login session issuance shared by login and sign-in.

use chrono::{DateTime, Utc};

use crate::domain::entity::{login_session::LoginSession, session_data::SessionData};
use crate::domain::repository::LoginSessionRepository;
use crate::domain::value_object::{login_session_token::LoginSessionToken, user_id::UserId};
use crate::error::AuthResult;

/// Generate a token, persist only its hash, and hand the plaintext back
pub(crate) async fn issue_login_session<S>(
    session_repo: &S,
    user_id: UserId,
    issued_at: DateTime<Utc>,
) -> AuthResult<(LoginSession, SessionData)>
where
    S: LoginSessionRepository,
{
    let token = LoginSessionToken::generate();
    let session = LoginSession::issue(user_id, token.hash()?, issued_at)?;

    session_repo.save(&session).await?;

    let session_data = SessionData::new(session.id(), user_id, token)?;
    Ok((session, session_data))
}
