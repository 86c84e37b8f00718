//! User Data
//!
//! 回答に添えられる任意のメタデータ。キーはトリム済みで空を許さない。
//! 構築時に一度だけ所有権を取り、以降は共有参照でのみ公開する。

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{HueError, HueResult};

/// Free-form metadata attached to a submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserData(BTreeMap<String, Value>);

impl UserData {
    pub fn new<I>(raw: I) -> HueResult<Self>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut values = BTreeMap::new();

        for (key, value) in raw {
            let trimmed = key.trim();
            if trimmed.is_empty() {
                return Err(HueError::InvalidUserData(
                    "keys cannot be blank".to_string(),
                ));
            }

            if values.insert(trimmed.to_string(), value).is_some() {
                return Err(HueError::InvalidUserData(format!(
                    "duplicate key {trimmed:?}"
                )));
            }
        }

        Ok(Self(values))
    }

    /// Empty metadata
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read-only view of the metadata
    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON object form for storage
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone().into_iter().collect())
    }
}
