use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Characters a store key may never contain.
const FORBIDDEN_KEY_CHARS: [char; 6] = ['.', '$', '#', '[', ']', '/'];

/// Maximum key length accepted by the store.
const MAX_KEY_LENGTH: usize = 768;

/// Opaque identifier assigned by the store when a record is created.
///
/// Ids are compared and ordered lexically. For store-generated push ids this
/// is also creation order, but callers must not rely on that.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a store key.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if the key is empty, too long, or
    /// contains a character the store reserves for paths.
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.is_empty() {
            return Err(DomainError::invalid_id("record id cannot be empty"));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(DomainError::invalid_id(format!(
                "record id cannot exceed {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if let Some(c) = key
            .chars()
            .find(|c| FORBIDDEN_KEY_CHARS.contains(c) || c.is_ascii_control())
        {
            return Err(DomainError::invalid_id(format!(
                "record id contains reserved character {:?}",
                c
            )));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> String {
        id.0
    }
}
