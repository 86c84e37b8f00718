//! Common ID Types
//!
//! Type-safe UUID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type SessionId = Id<markers::LoginSession>;
/// let id = SessionId::new();
/// assert!(!id.is_nil());
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create from an existing UUID (e.g. a persisted row)
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse from a string form, trimming surrounding whitespace
    pub fn parse_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s.trim()).map(Self::from_uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }

    /// Whether this is the all-zero UUID
    pub fn is_nil(&self) -> bool {
        self.value.is_nil()
    }
}

// Manual impls: derives would require `T: Clone`/`T: PartialEq` on the marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for LoginSession IDs
    pub struct LoginSession;

    /// Marker for HueRecord IDs
    pub struct HueRecord;
}

/// Type aliases for common IDs
pub type LoginSessionId = Id<markers::LoginSession>;
pub type HueRecordId = Id<markers::HueRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let session_id: LoginSessionId = Id::new();
        let record_id: HueRecordId = Id::new();

        // These are different types, cannot be mixed
        let _s: Uuid = session_id.into_uuid();
        let _r: Uuid = record_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: HueRecordId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_id_nil() {
        assert!(LoginSessionId::from_uuid(Uuid::nil()).is_nil());
        assert!(!LoginSessionId::new().is_nil());
    }

    #[test]
    fn test_id_parse_str_trims() {
        let uuid = Uuid::new_v4();
        let id = HueRecordId::parse_str(&format!("  {uuid} ")).unwrap();
        assert_eq!(id.into_uuid(), uuid);
        assert!(HueRecordId::parse_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_id_copy_without_marker_bounds() {
        let a = LoginSessionId::new();
        let b = a;
        assert_eq!(a, b);
    }
}
