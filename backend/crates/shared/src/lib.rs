//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! `auth` and `hue` domains:
//! - Common error types and result aliases
//! - Typed UUID identifiers
//!
//! **Design Principle**: Only include things that have the same meaning
//! in every domain crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
