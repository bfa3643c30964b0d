//! Type-safe idea identifier.
//!
//! [`IdeaId`] is a newtype around the string identifier carried by every
//! generated idea. Fresh ids are UUID v4 strings; ids that arrive from
//! URLs or from stored data are accepted verbatim, since frame links
//! and the web client's local storage predate this service.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// Unique identifier for a generated idea.
///
/// Generated once per call to the generation client and immutable
/// thereafter. Used as the key for saved ideas and frame snapshots.
/// Deserialization goes through [`IdeaId::parse`], so blank ids are
/// rejected in request bodies as well as in paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, utoipa::ToSchema)]
#[serde(transparent)]
pub struct IdeaId(String);

impl IdeaId {
    /// Creates a new random `IdeaId` (UUID v4, hyphenated).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier string.
    ///
    /// Returns `None` if the string is empty or only whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for IdeaId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| de::Error::custom("idea id must not be blank"))
    }
}

impl Default for IdeaId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdeaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        let a = IdeaId::new();
        let b = IdeaId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn new_is_uuid_format() {
        let id = IdeaId::new();
        assert_eq!(id.as_str().len(), 36);
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn parse_accepts_legacy_ids() {
        let Some(id) = IdeaId::parse("k3j9x2lq1mabc") else {
            panic!("legacy id rejected");
        };
        assert_eq!(id.as_str(), "k3j9x2lq1mabc");
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(IdeaId::parse("").is_none());
        assert!(IdeaId::parse("   ").is_none());
    }

    #[test]
    fn serializes_as_plain_string() {
        let Some(id) = IdeaId::parse("abc") else {
            panic!("valid id");
        };
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json.as_deref(), Some("\"abc\""));
    }

    #[test]
    fn deserialize_trims_and_rejects_blank() {
        let id: Result<IdeaId, _> = serde_json::from_str("\" abc \"");
        assert_eq!(id.ok().as_ref().map(IdeaId::as_str), Some("abc"));
        assert!(serde_json::from_str::<IdeaId>("\"\"").is_err());
        assert!(serde_json::from_str::<IdeaId>("\"   \"").is_err());
    }
}
