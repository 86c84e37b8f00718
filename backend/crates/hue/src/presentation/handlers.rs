//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use auth::domain::repository::{LoginSessionRepository, UserRepository};

use crate::application::{GetDataUseCase, SaveResultUseCase};
use crate::domain::repository::HueRecordRepository;
use crate::error::HueResult;
use crate::presentation::dto::{GetDataRequest, GetDataResponse, SaveResultRequest};

/// Shared state for hue handlers
#[derive(Clone)]
pub struct HueAppState<H, A>
where
    H: HueRecordRepository + Clone + Send + Sync + 'static,
    A: UserRepository + LoginSessionRepository + Clone + Send + Sync + 'static,
{
    pub records: Arc<H>,
    pub auth: Arc<A>,
}

// ============================================================================
// Save Result
// ============================================================================

/// POST /api/hue-are-you/save-result
pub async fn save_result<H, A>(
    State(state): State<HueAppState<H, A>>,
    Json(req): Json<SaveResultRequest>,
) -> HueResult<StatusCode>
where
    H: HueRecordRepository + Clone + Send + Sync + 'static,
    A: UserRepository + LoginSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SaveResultUseCase::new(state.records.clone());
    use_case.execute(req.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Get Data
// ============================================================================

/// POST /api/hue-are-you/get-data
pub async fn get_data<H, A>(
    State(state): State<HueAppState<H, A>>,
    Json(req): Json<GetDataRequest>,
) -> HueResult<Json<GetDataResponse>>
where
    H: HueRecordRepository + Clone + Send + Sync + 'static,
    A: UserRepository + LoginSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetDataUseCase::new(
        state.records.clone(),
        state.auth.clone(),
        state.auth.clone(),
    );
    let records = use_case.execute(req.into()).await?;

    Ok(Json(GetDataResponse::from(records.as_slice())))
}
