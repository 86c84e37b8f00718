//! Get Data Use Case
//!
//! Returns a range of stored answers to an authenticated administrator.

use std::sync::Arc;

use auth::application::AuthorizeAdminUseCase;
use auth::domain::entity::session_data::SessionData;
use auth::domain::repository::{LoginSessionRepository, UserRepository};

use crate::domain::entity::hue_record::HueRecord;
use crate::domain::repository::HueRecordRepository;
use crate::domain::value_object::record_range::RecordRange;
use crate::error::{HueError, HueResult};

/// Get data input
pub struct GetDataInput {
    /// Login session UUID, as returned by login
    pub session_id: String,
    pub user_id: String,
    /// Plaintext login session token
    pub token: String,
    /// `[begin, end]`, inclusive
    pub data_range: Vec<i64>,
}

/// Get data use case
pub struct GetDataUseCase<H, U, S>
where
    H: HueRecordRepository,
    U: UserRepository,
    S: LoginSessionRepository,
{
    record_repo: Arc<H>,
    authorize_admin: AuthorizeAdminUseCase<U, S>,
}

impl<H, U, S> GetDataUseCase<H, U, S>
where
    H: HueRecordRepository,
    U: UserRepository,
    S: LoginSessionRepository,
{
    pub fn new(record_repo: Arc<H>, user_repo: Arc<U>, session_repo: Arc<S>) -> Self {
        Self {
            record_repo,
            authorize_admin: AuthorizeAdminUseCase::new(user_repo, session_repo),
        }
    }

    pub async fn execute(&self, input: GetDataInput) -> HueResult<Vec<HueRecord>> {
        // Reject malformed input before touching storage
        let session_data = SessionData::parse(&input.session_id, &input.user_id, &input.token)?;
        let range = parse_range(&input.data_range)?;

        let admin = self.authorize_admin.execute(&session_data).await?;
        let records = self.record_repo.find_range(&range).await?;

        tracing::info!(
            user_id = %admin.user_id,
            begin = range.begin(),
            end = range.end(),
            returned = records.len(),
            "Hue records read"
        );

        Ok(records)
    }
}

fn parse_range(raw: &[i64]) -> HueResult<RecordRange> {
    match raw {
        [begin, end] => RecordRange::new(*begin, *end),
        _ => Err(HueError::Validation(format!(
            "data_range must have exactly two elements (got {})",
            raw.len()
        ))),
    }
}
