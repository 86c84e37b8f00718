//! API DTOs (Data Transfer Objects)
//!
//! Field names are the wire contract shared with the survey frontend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::{GetDataInput, SaveResultInput};
use crate::domain::entity::hue_record::HueRecord;

// ============================================================================
// Records
// ============================================================================

/// One answer as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HueRecordPayload {
    pub name: String,
    pub choice: BTreeMap<String, String>,
}

impl From<&HueRecord> for HueRecordPayload {
    fn from(record: &HueRecord) -> Self {
        Self {
            name: record.name().to_string(),
            choice: record.choice_map(),
        }
    }
}

// ============================================================================
// Save Result
// ============================================================================

/// Save result request
#[derive(Debug, Clone, Deserialize)]
pub struct SaveResultRequest {
    #[serde(default)]
    pub user_data: Option<Map<String, Value>>,
    pub record: HueRecordPayload,
}

impl From<SaveResultRequest> for SaveResultInput {
    fn from(req: SaveResultRequest) -> Self {
        Self {
            user_data: req.user_data,
            name: req.record.name,
            choices: req.record.choice,
        }
    }
}

// ============================================================================
// Get Data
// ============================================================================

/// Get data request
#[derive(Debug, Clone, Deserialize)]
pub struct GetDataRequest {
    pub session_id: String,
    pub user_id: String,
    pub token: String,
    #[serde(alias = "data-range")]
    pub data_range: Vec<i64>,
}

impl From<GetDataRequest> for GetDataInput {
    fn from(req: GetDataRequest) -> Self {
        Self {
            session_id: req.session_id,
            user_id: req.user_id,
            token: req.token,
            data_range: req.data_range,
        }
    }
}

/// Get data response
#[derive(Debug, Clone, Serialize)]
pub struct GetDataResponse {
    pub records: Vec<HueRecordPayload>,
}

impl From<&[HueRecord]> for GetDataResponse {
    fn from(records: &[HueRecord]) -> Self {
        Self {
            records: records.iter().map(HueRecordPayload::from).collect(),
        }
    }
}
