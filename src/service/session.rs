//! Per-process session settings.

use serde::Serialize;
use utoipa::ToSchema;

use crate::storage::IdeaStore;

/// Where the premium entitlement comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PremiumSource {
    /// The flag persisted in the idea store.
    Stored,
    /// Fixed by configuration; the stored flag is ignored.
    Fixed(bool),
}

/// Identity and entitlements of the single user this gateway serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Identifier stamped on saved ideas.
    pub user_id: String,
    /// Premium entitlement source.
    pub premium: PremiumSource,
}

impl Session {
    /// Creates a session.
    #[must_use]
    pub fn new(user_id: impl Into<String>, premium: PremiumSource) -> Self {
        Self {
            user_id: user_id.into(),
            premium,
        }
    }

    /// Effective premium status.
    #[must_use]
    pub fn is_premium(&self, store: &IdeaStore) -> bool {
        match self.premium {
            PremiumSource::Stored => store.is_premium_user(),
            PremiumSource::Fixed(premium) => premium,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new("current_user", PremiumSource::Stored)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn stored_source_follows_store() {
        let store = IdeaStore::new(Arc::new(MemoryStore::new()));
        let session = Session::default();
        assert!(!session.is_premium(&store));
        store.set_premium_status(true);
        assert!(session.is_premium(&store));
    }

    #[test]
    fn fixed_source_ignores_store() {
        let store = IdeaStore::new(Arc::new(MemoryStore::new()));
        store.set_premium_status(true);
        let session = Session::new("u", PremiumSource::Fixed(false));
        assert!(!session.is_premium(&store));
    }
}
