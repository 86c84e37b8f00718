//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::HueAppState;
pub use router::{hue_router, hue_router_generic};
