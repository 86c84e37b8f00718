//! Hue Record
//!
//! 参加者名と色の割り当てをまとめた 1 件の回答。作成後は不変。

use std::collections::BTreeMap;

use auth::domain::value_object::name::Name;
use kernel::id::HueRecordId;

use crate::domain::value_object::hue_choices::HueChoices;
use crate::error::{HueError, HueResult};

/// One participant's answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueRecord {
    id: HueRecordId,
    name: Name,
    choices: HueChoices,
}

impl HueRecord {
    /// New record with a fresh identifier
    pub fn new(name: Name, choices: HueChoices) -> HueResult<Self> {
        Self::from_persistence(HueRecordId::new(), name, choices)
    }

    /// Build from untrusted request strings
    pub fn from_raw(raw_name: &str, raw_choices: &BTreeMap<String, String>) -> HueResult<Self> {
        let name = Name::new(raw_name)?;
        let choices = HueChoices::from_map(raw_choices)?;
        Self::new(name, choices)
    }

    /// Rebuild a stored record
    pub fn from_persistence(id: HueRecordId, name: Name, choices: HueChoices) -> HueResult<Self> {
        if id.is_nil() {
            return Err(HueError::Internal("hue record id is nil".to_string()));
        }

        if choices.is_empty() {
            return Err(HueError::InvalidChoice(
                "at least one choice is required".to_string(),
            ));
        }

        Ok(Self { id, name, choices })
    }

    pub fn id(&self) -> HueRecordId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn choices(&self) -> &HueChoices {
        &self.choices
    }

    pub fn choice_map(&self) -> BTreeMap<String, String> {
        self.choices.to_map()
    }
}
