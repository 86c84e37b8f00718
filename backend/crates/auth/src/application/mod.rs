//! Application Layer
//!
//! Use cases and application services.

pub mod authorize_admin;
pub mod config;
pub mod login;
pub mod provision_admin;
mod session;
pub mod sign_in;
mod timing;
pub mod verify_session;

// Re-exports
pub use authorize_admin::AuthorizeAdminUseCase;
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use provision_admin::{ProvisionAdminInput, ProvisionAdminUseCase};
pub use sign_in::{SignInInput, SignInUseCase};
pub use verify_session::VerifySessionUseCase;
