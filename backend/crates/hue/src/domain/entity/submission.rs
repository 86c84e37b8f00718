//! Hue Result Submission
//!
//! An anonymous survey answer: the record plus whatever metadata the client sent.

use crate::domain::entity::hue_record::HueRecord;
use crate::domain::value_object::user_data::UserData;

#[derive(Debug, Clone, PartialEq)]
pub struct HueResultSubmission {
    user_data: UserData,
    record: HueRecord,
}

impl HueResultSubmission {
    pub fn new(user_data: UserData, record: HueRecord) -> Self {
        Self { user_data, record }
    }

    pub fn user_data(&self) -> &UserData {
        &self.user_data
    }

    pub fn record(&self) -> &HueRecord {
        &self.record
    }
}
