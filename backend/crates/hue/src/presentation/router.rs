//! Hue Router

use axum::{Router, routing::post};
use std::sync::Arc;

use auth::PgAuthRepository;
use auth::domain::repository::{LoginSessionRepository, UserRepository};

use crate::domain::repository::HueRecordRepository;
use crate::infra::postgres::PgHueRepository;
use crate::presentation::handlers::{self, HueAppState};

/// Create the Hue router with PostgreSQL repositories
pub fn hue_router(records: PgHueRepository, auth: PgAuthRepository) -> Router {
    hue_router_generic(records, auth)
}

/// Create a generic Hue router for any repository implementations
pub fn hue_router_generic<H, A>(records: H, auth: A) -> Router
where
    H: HueRecordRepository + Clone + Send + Sync + 'static,
    A: UserRepository + LoginSessionRepository + Clone + Send + Sync + 'static,
{
    let state = HueAppState {
        records: Arc::new(records),
        auth: Arc::new(auth),
    };

    Router::new()
        .route("/save-result", post(handlers::save_result::<H, A>))
        .route("/get-data", post(handlers::get_data::<H, A>))
        .with_state(state)
}
