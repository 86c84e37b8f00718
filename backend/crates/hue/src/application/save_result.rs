//! Save Result Use Case
//!
//! Stores an anonymous survey answer. No session is required.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::HueRecordId;
use serde_json::{Map, Value};

use crate::domain::entity::{hue_record::HueRecord, submission::HueResultSubmission};
use crate::domain::repository::HueRecordRepository;
use crate::domain::value_object::user_data::UserData;
use crate::error::HueResult;

/// Save result input
pub struct SaveResultInput {
    /// Optional free-form metadata
    pub user_data: Option<Map<String, Value>>,
    /// Participant name
    pub name: String,
    /// Word → color label
    pub choices: BTreeMap<String, String>,
}

/// Save result use case
pub struct SaveResultUseCase<H>
where
    H: HueRecordRepository,
{
    record_repo: Arc<H>,
}

impl<H> SaveResultUseCase<H>
where
    H: HueRecordRepository,
{
    pub fn new(record_repo: Arc<H>) -> Self {
        Self { record_repo }
    }

    pub async fn execute(&self, input: SaveResultInput) -> HueResult<HueRecordId> {
        let record = HueRecord::from_raw(&input.name, &input.choices)?;
        let user_data = match input.user_data {
            Some(raw) => UserData::new(raw)?,
            None => UserData::empty(),
        };

        let submission = HueResultSubmission::new(user_data, record);
        self.record_repo.save(&submission).await?;

        let record_id = submission.record().id();
        tracing::info!(
            record_id = %record_id,
            choices = submission.record().choices().len(),
            "Hue result saved"
        );

        Ok(record_id)
    }
}
