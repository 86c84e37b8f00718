//! Value Object Module

pub mod email;
pub mod hashed_password;
pub mod login_session_token;
pub mod name;
pub mod token;
pub mod user_id;
pub mod user_role;
