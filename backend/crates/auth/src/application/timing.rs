//! Equal-cost failure path for unknown users.

use std::sync::OnceLock;

use crate::domain::value_object::hashed_password::{HashedPassword, RawPassword};

fn dummy_hash() -> Option<&'static HashedPassword> {
    static DUMMY: OnceLock<Option<HashedPassword>> = OnceLock::new();
    DUMMY
        .get_or_init(|| {
            let raw = RawPassword::new("dummy-password-for-timing".to_string()).ok()?;
            HashedPassword::from_raw(&raw, None).ok()
        })
        .as_ref()
}

/// Spend one Argon2 verification so a missing user costs the same as a wrong password
pub(crate) fn burn_password_check(password: &RawPassword, pepper: Option<&[u8]>) {
    if let Some(hash) = dummy_hash() {
        let _ = hash.verify(password, pepper);
    }
}
