//! Hue Are You - Survey Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Color palette, choices, records, repository traits
//! - `application/` - Save-result and get-data use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! - Anyone may submit an answer (no session)
//! - Only an administrator with a valid login session may read answers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{HueError, HueResult};
pub use infra::postgres::PgHueRepository;
pub use presentation::router::hue_router;
