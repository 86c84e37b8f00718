//! Use-case and HTTP tests backed by an in-memory repository.

use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use kernel::id::LoginSessionId;

use crate::application::{
    AuthConfig, AuthorizeAdminUseCase, LoginInput, LoginUseCase, ProvisionAdminInput,
    ProvisionAdminUseCase, SignInInput, SignInUseCase, VerifySessionUseCase,
};
use crate::domain::entity::{login_session::LoginSession, session_data::SessionData, user::User};
use crate::domain::repository::{LoginSessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    hashed_password::{HashedPassword, RawPassword},
    login_session_token::LoginSessionToken,
    name::Name,
    user_id::UserId,
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Mock repository
// ============================================================================

#[derive(Default)]
struct MockState {
    users: Vec<User>,
    sessions: Vec<LoginSession>,
    deleted: Vec<LoginSessionId>,
    rows_read: usize,
    fail_delete: bool,
}

#[derive(Clone, Default)]
struct MockAuthRepository {
    state: Arc<Mutex<MockState>>,
}

impl MockAuthRepository {
    fn with_user(name: &str, email: &str, password: &str, role: UserRole) -> Self {
        let repo = Self::default();
        repo.add_user(name, email, password, role);
        repo
    }

    fn add_user(&self, name: &str, email: &str, password: &str, role: UserRole) -> UserId {
        let raw = RawPassword::new(password.to_string()).unwrap();
        let user = User::new(
            Name::new(name).unwrap(),
            Email::new(email).unwrap(),
            HashedPassword::from_raw(&raw, None).unwrap(),
            role,
        );
        let user_id = user.user_id;
        self.state.lock().unwrap().users.push(user);
        user_id
    }

    fn insert_session(&self, session: LoginSession) {
        self.state.lock().unwrap().sessions.push(session);
    }

    fn session_count(&self) -> usize {
        self.state.lock().unwrap().sessions.len()
    }

    fn deleted(&self) -> Vec<LoginSessionId> {
        self.state.lock().unwrap().deleted.clone()
    }

    fn rows_read(&self) -> usize {
        self.state.lock().unwrap().rows_read
    }
}

impl UserRepository for MockAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.state.lock().unwrap().users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.user_id == *user_id).cloned())
    }

    async fn find_by_name(&self, name: &Name) -> AuthResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.name == *name).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.email == *email).cloned())
    }
}

impl LoginSessionRepository for MockAuthRepository {
    async fn save(&self, session: &LoginSession) -> AuthResult<()> {
        self.state.lock().unwrap().sessions.push(session.clone());
        Ok(())
    }

    async fn find_by_session_id(&self, session_id: &LoginSessionId) -> AuthResult<Option<LoginSession>> {
        let mut state = self.state.lock().unwrap();
        let found = state.sessions.iter().find(|s| s.id() == *session_id).cloned();
        state.rows_read += usize::from(found.is_some());
        Ok(found)
    }

    async fn delete_by_id(&self, session_id: &LoginSessionId) -> AuthResult<()> {
        let mut state = self.state.lock().unwrap();
        state.deleted.push(*session_id);
        if state.fail_delete {
            return Err(AuthError::Internal("delete failed".to_string()));
        }
        state.sessions.retain(|s| s.id() != *session_id);
        Ok(())
    }

    async fn delete_expired(&self, now: chrono::DateTime<Utc>) -> AuthResult<u64> {
        let mut state = self.state.lock().unwrap();
        let before = state.sessions.len();
        state.sessions.retain(|s| !s.is_expired(now));
        Ok((before - state.sessions.len()) as u64)
    }
}

fn config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::default())
}

fn login_use_case(repo: &MockAuthRepository) -> LoginUseCase<MockAuthRepository, MockAuthRepository> {
    LoginUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()), config())
}

fn login_input(name: &str, password: &str) -> LoginInput {
    LoginInput {
        name: name.to_string(),
        password: password.to_string(),
    }
}

/// Session issued `age` ago for `user_id`, with its plaintext token
fn aged_session(user_id: UserId, age: Duration) -> (LoginSession, SessionData) {
    let token = LoginSessionToken::generate();
    let session = LoginSession::issue(user_id, token.hash().unwrap(), Utc::now() - age).unwrap();
    let data = SessionData::new(session.id(), user_id, token).unwrap();
    (session, data)
}

// ============================================================================
// Login
// ============================================================================

mod login {
    use super::*;

    #[tokio::test]
    async fn admin_login_returns_uuid_token() {
        let repo = MockAuthRepository::with_user("admin", "admin@example.com", "secret", UserRole::Admin);

        let output = login_use_case(&repo)
            .execute(login_input("admin", "secret"))
            .await
            .unwrap();

        assert!(uuid::Uuid::parse_str(&output.token.to_string()).is_ok());
        assert_eq!(repo.session_count(), 1);

        let state = repo.state.lock().unwrap();
        let stored = &state.sessions[0];
        assert_eq!(output.token.as_uuid(), stored.id().as_uuid());
        assert_eq!(stored.user_id(), output.session.user_id());
        assert!(stored.verify(output.session.token()));
        assert_ne!(stored.token_hash().as_str(), output.session.token().expose());
        assert_eq!(stored.expires_at() - stored.created_at(), Duration::minutes(30));
    }

    #[tokio::test]
    async fn login_trims_input() {
        let repo = MockAuthRepository::with_user("admin", "admin@example.com", "secret", UserRole::Admin);
        let result = login_use_case(&repo)
            .execute(login_input("  admin ", " secret  "))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let repo = MockAuthRepository::with_user("admin", "admin@example.com", "secret", UserRole::Admin);
        let use_case = login_use_case(&repo);

        let wrong = use_case.execute(login_input("admin", "nope")).await.unwrap_err();
        let unknown = use_case.execute(login_input("ghost", "secret")).await.unwrap_err();

        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert_eq!(wrong.public_message(), unknown.public_message());
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn non_admin_cannot_login() {
        let repo = MockAuthRepository::with_user("alice", "alice@example.com", "secret", UserRole::User);
        let err = login_use_case(&repo)
            .execute(login_input("alice", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn blank_input_is_rejected_before_lookup() {
        let repo = MockAuthRepository::default();
        let err = login_use_case(&repo)
            .execute(login_input("   ", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));

        let err = login_use_case(&repo)
            .execute(login_input("admin", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn concurrent_logins_yield_independent_sessions() {
        let repo = MockAuthRepository::with_user("admin", "admin@example.com", "secret", UserRole::Admin);
        let use_case = login_use_case(&repo);

        let first = use_case.execute(login_input("admin", "secret")).await.unwrap();
        let second = use_case.execute(login_input("admin", "secret")).await.unwrap();

        assert_ne!(first.token, second.token);
        assert_eq!(repo.session_count(), 2);

        let verify = VerifySessionUseCase::new(Arc::new(repo.clone()));
        assert!(verify.execute(&first.session).await.is_ok());
        assert!(verify.execute(&second.session).await.is_ok());
    }
}

// ============================================================================
// Sign In
// ============================================================================

mod sign_in {
    use super::*;

    fn input(name: &str, email: &str, password: &str) -> SignInInput {
        SignInInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn use_case(repo: &MockAuthRepository) -> SignInUseCase<MockAuthRepository, MockAuthRepository> {
        SignInUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()), config())
    }

    #[tokio::test]
    async fn sign_in_issues_session_for_any_role() {
        let repo = MockAuthRepository::with_user("alice", "alice@example.com", "pw", UserRole::User);

        let data = use_case(&repo)
            .execute(input("alice", "Alice@Example.com", "pw"))
            .await
            .unwrap();

        assert_eq!(repo.session_count(), 1);
        let verified = VerifySessionUseCase::new(Arc::new(repo.clone()))
            .execute(&data)
            .await
            .unwrap();
        assert_eq!(verified.user_id(), data.user_id());
    }

    #[tokio::test]
    async fn sign_in_requires_matching_name() {
        let repo = MockAuthRepository::with_user("alice", "alice@example.com", "pw", UserRole::User);
        let err = use_case(&repo)
            .execute(input("bob", "alice@example.com", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn sign_in_rejects_bad_password_and_unknown_email() {
        let repo = MockAuthRepository::with_user("alice", "alice@example.com", "pw", UserRole::User);

        let err = use_case(&repo)
            .execute(input("alice", "alice@example.com", "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        let err = use_case(&repo)
            .execute(input("alice", "nobody@example.com", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn sign_in_rejects_malformed_email() {
        let repo = MockAuthRepository::default();
        let err = use_case(&repo)
            .execute(input("alice", "not-an-email", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }
}

// ============================================================================
// Session verification
// ============================================================================

mod verify_session {
    use super::*;

    #[tokio::test]
    async fn fresh_session_is_valid() {
        let repo = MockAuthRepository::default();
        let user_id = UserId::new();
        let (session, data) = aged_session(user_id, Duration::minutes(5));
        repo.insert_session(session.clone());

        let verified = VerifySessionUseCase::new(Arc::new(repo.clone()))
            .execute(&data)
            .await
            .unwrap();
        assert_eq!(verified.id(), session.id());
        assert!(repo.deleted().is_empty());
    }

    #[tokio::test]
    async fn expired_session_is_deleted_and_reported() {
        let repo = MockAuthRepository::default();
        let user_id = UserId::new();
        let (session, data) = aged_session(user_id, Duration::minutes(31));
        repo.insert_session(session.clone());

        let err = VerifySessionUseCase::new(Arc::new(repo.clone()))
            .execute(&data)
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::SessionExpired));
        assert_eq!(repo.deleted(), vec![session.id()]);
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn failed_cleanup_is_not_surfaced() {
        let repo = MockAuthRepository::default();
        repo.state.lock().unwrap().fail_delete = true;
        let (session, data) = aged_session(UserId::new(), Duration::hours(2));
        repo.insert_session(session);

        let err = VerifySessionUseCase::new(Arc::new(repo.clone()))
            .execute(&data)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionExpired));
    }

    #[tokio::test]
    async fn expiry_instant_is_inclusive() {
        let repo = MockAuthRepository::default();
        let (session, data) = aged_session(UserId::new(), Duration::zero());
        let expires_at = session.expires_at();
        repo.insert_session(session);
        let use_case = VerifySessionUseCase::new(Arc::new(repo.clone()));

        assert!(use_case.execute_at(&data, expires_at - Duration::seconds(1)).await.is_ok());
        assert!(matches!(
            use_case.execute_at(&data, expires_at).await,
            Err(AuthError::SessionExpired)
        ));
    }

    #[tokio::test]
    async fn unknown_or_mismatched_token_is_invalid() {
        let repo = MockAuthRepository::default();
        let user_id = UserId::new();
        let (session, _) = aged_session(user_id, Duration::minutes(1));
        let session_id = session.id();
        repo.insert_session(session);
        let use_case = VerifySessionUseCase::new(Arc::new(repo.clone()));

        let forged = SessionData::new(session_id, user_id, LoginSessionToken::generate()).unwrap();
        assert!(matches!(
            use_case.execute(&forged).await,
            Err(AuthError::SessionInvalid)
        ));

        let unknown_id =
            SessionData::new(LoginSessionId::new(), user_id, LoginSessionToken::generate()).unwrap();
        assert!(matches!(
            use_case.execute(&unknown_id).await,
            Err(AuthError::SessionInvalid)
        ));

        let stranger = SessionData::new(session_id, UserId::new(), LoginSessionToken::generate()).unwrap();
        assert!(matches!(
            use_case.execute(&stranger).await,
            Err(AuthError::SessionInvalid)
        ));
        assert!(repo.deleted().is_empty());
    }

    #[tokio::test]
    async fn wrong_token_reads_one_row_however_many_sessions_exist() {
        let repo = MockAuthRepository::default();
        let user_id = UserId::new();
        for _ in 0..20 {
            repo.insert_session(aged_session(user_id, Duration::hours(3)).0);
        }
        let (live, _) = aged_session(user_id, Duration::minutes(1));
        let live_id = live.id();
        repo.insert_session(live);

        let wrong = SessionData::new(live_id, user_id, LoginSessionToken::generate()).unwrap();
        let err = VerifySessionUseCase::new(Arc::new(repo.clone()))
            .execute(&wrong)
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::SessionInvalid));
        assert_eq!(repo.rows_read(), 1);
        assert!(repo.deleted().is_empty());
        assert_eq!(repo.session_count(), 21);
    }

    #[tokio::test]
    async fn delete_expired_sweeps_only_stale_rows() {
        let repo = MockAuthRepository::default();
        repo.insert_session(aged_session(UserId::new(), Duration::minutes(45)).0);
        repo.insert_session(aged_session(UserId::new(), Duration::minutes(1)).0);

        let removed = repo.delete_expired(Utc::now()).await.unwrap();
        assert_eq!(removed, 1);
        assert_eq!(repo.session_count(), 1);
    }
}

// ============================================================================
// Admin authorization and provisioning
// ============================================================================

mod admin {
    use super::*;

    #[tokio::test]
    async fn admin_session_is_authorized() {
        let repo = MockAuthRepository::with_user("admin", "admin@example.com", "secret", UserRole::Admin);
        let output = login_use_case(&repo)
            .execute(login_input("admin", "secret"))
            .await
            .unwrap();

        let user = AuthorizeAdminUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()))
            .execute(&output.session)
            .await
            .unwrap();
        assert_eq!(user.name.as_str(), "admin");
    }

    #[tokio::test]
    async fn non_admin_session_is_forbidden() {
        let repo = MockAuthRepository::with_user("alice", "alice@example.com", "pw", UserRole::User);
        let data = SignInUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()), config())
            .execute(SignInInput {
                name: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        let err = AuthorizeAdminUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()))
            .execute(&data)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Forbidden));
    }

    #[tokio::test]
    async fn session_of_missing_user_is_invalid() {
        let repo = MockAuthRepository::default();
        let (session, data) = aged_session(UserId::new(), Duration::minutes(1));
        repo.insert_session(session);

        let err = AuthorizeAdminUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()))
            .execute(&data)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionInvalid));
    }

    fn provision_input() -> ProvisionAdminInput {
        ProvisionAdminInput {
            name: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn provisioned_admin_can_login() {
        let repo = MockAuthRepository::default();
        let provision = ProvisionAdminUseCase::new(Arc::new(repo.clone()), config());

        assert!(provision.execute(provision_input()).await.unwrap());
        assert!(!provision.execute(provision_input()).await.unwrap());

        let state_users = repo.state.lock().unwrap().users.len();
        assert_eq!(state_users, 1);

        let output = login_use_case(&repo)
            .execute(login_input("admin", "secret"))
            .await
            .unwrap();
        assert!(!output.session.user_id().is_nil());
    }

    #[tokio::test]
    async fn provisioning_with_pepper_requires_same_pepper_at_login() {
        let repo = MockAuthRepository::default();
        let peppered = Arc::new(AuthConfig::with_pepper(b"pepper".to_vec()));

        ProvisionAdminUseCase::new(Arc::new(repo.clone()), peppered.clone())
            .execute(provision_input())
            .await
            .unwrap();

        let without = login_use_case(&repo).execute(login_input("admin", "secret")).await;
        assert!(matches!(without, Err(AuthError::InvalidCredentials)));

        let with = LoginUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()), peppered)
            .execute(login_input("admin", "secret"))
            .await;
        assert!(with.is_ok());
    }
}

// ============================================================================
// HTTP
// ============================================================================

mod http {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::presentation::router::auth_router_generic;

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn login_route_returns_token_and_session() {
        let repo = MockAuthRepository::with_user("admin", "admin@example.com", "secret", UserRole::Admin);
        let app = auth_router_generic(repo, AuthConfig::default());

        let response = app
            .oneshot(post_json(
                "/login",
                serde_json::json!({"name": "admin", "password": "secret"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(uuid::Uuid::parse_str(body["token"].as_str().unwrap()).is_ok());
        assert!(body["session"]["user_id"].is_string());
        assert_eq!(body["session"]["session_id"], body["token"]);
        assert_eq!(body["session"]["token"].as_str().unwrap().len(), 43);
    }

    #[tokio::test]
    async fn login_route_rejects_bad_credentials() {
        let repo = MockAuthRepository::with_user("admin", "admin@example.com", "secret", UserRole::Admin);
        let app = auth_router_generic(repo, AuthConfig::default());

        let response = app
            .oneshot(post_json(
                "/login",
                serde_json::json!({"name": "admin", "password": "wrong"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["detail"], "Invalid credentials");
    }

    #[tokio::test]
    async fn login_route_rejects_blank_name() {
        let app = auth_router_generic(MockAuthRepository::default(), AuthConfig::default());

        let response = app
            .oneshot(post_json(
                "/login",
                serde_json::json!({"name": "  ", "password": "secret"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sign_in_route_returns_session_payload() {
        let repo = MockAuthRepository::with_user("alice", "alice@example.com", "pw", UserRole::User);
        let app = auth_router_generic(repo, AuthConfig::default());

        let response = app
            .oneshot(post_json(
                "/sign-in",
                serde_json::json!({"name": "alice", "email": "alice@example.com", "password": "pw"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["user_id"].is_string());
        assert!(uuid::Uuid::parse_str(body["session_id"].as_str().unwrap()).is_ok());
        assert!(body["token"].is_string());
    }
}
