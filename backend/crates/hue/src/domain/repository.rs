//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{hue_record::HueRecord, submission::HueResultSubmission};
use crate::domain::value_object::record_range::RecordRange;
use crate::error::HueResult;

/// Hue record repository trait
#[trait_variant::make(HueRecordRepository: Send)]
pub trait LocalHueRecordRepository {
    /// Persist a submission (record and its metadata)
    async fn save(&self, submission: &HueResultSubmission) -> HueResult<()>;

    /// Records in submission order, `range.begin()` through `range.end()` inclusive
    async fn find_range(&self, range: &RecordRange) -> HueResult<Vec<HueRecord>>;
}
