//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{login_session::LoginSession, session_data::SessionData, user::User};
pub use repository::{LoginSessionRepository, UserRepository};
