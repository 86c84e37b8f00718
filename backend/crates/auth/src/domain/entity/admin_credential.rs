//! Admin Credential
//!
//! 管理者ログインの入力（名前 + パスワード）。

use kernel::error::app_error::AppResult;

use crate::domain::value_object::{
    hashed_password::{HashedPassword, RawPassword},
    name::Name,
};

/// Name and password presented at admin login
///
/// The password is kept as validated clear text (zeroized on drop) so it can
/// be checked against a stored salted hash; [`AdminCredential::hash`] derives
/// a fresh hash when an account is provisioned.
#[derive(Debug)]
pub struct AdminCredential {
    name: Name,
    password: RawPassword,
}

impl AdminCredential {
    pub fn new(raw_name: &str, raw_password: String) -> AppResult<Self> {
        let name = Name::new(raw_name)?;
        let password = RawPassword::new(raw_password)?;
        Ok(Self { name, password })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn password(&self) -> &RawPassword {
        &self.password
    }

    /// Derive a storable hash of the password
    pub fn hash(&self, pepper: Option<&[u8]>) -> AppResult<HashedPassword> {
        HashedPassword::from_raw(&self.password, pepper)
    }
}
