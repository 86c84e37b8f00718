//! Name Value Object
//!
//! 回答者・ユーザーを表示・照合するための名前。
//!
//! ## 不変条件
//! - 前後の空白はトリムされる
//! - トリム後に空文字であってはならない
//! - 制御文字を含まない

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use std::str::FromStr;

/// Trimmed, non-empty name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[display("{_0}")]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a name from untrusted input
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(AppError::bad_request("Name cannot be empty")
                .with_action("Please enter a name"));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Name::new(s)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
