//! Entity Module

pub mod admin_credential;
pub mod login_session;
pub mod session_data;
pub mod sign_in_credential;
pub mod user;
