//! Saved ideas, filter preferences, and the premium flag.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{KeyValueStore, StoreError, keys};
use crate::domain::{FilterOptions, Idea, IdeaId, SavedIdea};

/// Key-based CRUD over a [`KeyValueStore`].
///
/// Every operation is infallible from the caller's point of view: a
/// storage failure is logged and the operation yields an empty list,
/// `false`, or default preferences.
///
/// Clones share one write lock, so updates to the saved list from
/// concurrent requests are serialized.
#[derive(Debug, Clone)]
pub struct IdeaStore {
    kv: Arc<dyn KeyValueStore>,
    saved_lock: Arc<Mutex<()>>,
}

impl IdeaStore {
    /// Wraps a key-value backend.
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            saved_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All saved ideas, most recently saved first.
    #[must_use]
    pub fn saved_ideas(&self) -> Vec<SavedIdea> {
        match read_json(self.kv.as_ref(), keys::SAVED_IDEAS) {
            Ok(ideas) => ideas.unwrap_or_default(),
            Err(e) => {
                tracing::error!(error = %e, "failed to load saved ideas");
                Vec::new()
            }
        }
    }

    /// Saves `idea` for `user_id`.
    ///
    /// Idempotent per idea id: if the idea is already saved the existing
    /// record is returned and nothing is written. New records are
    /// prepended. If the write fails the new record is still returned.
    pub fn save_idea(&self, idea: &Idea, user_id: &str) -> SavedIdea {
        let _guard = self.saved_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut saved = self.saved_ideas();
        if let Some(existing) = saved.iter().find(|s| s.idea_id == idea.idea_id) {
            tracing::debug!(idea_id = %idea.idea_id, "idea already saved");
            return existing.clone();
        }

        let record = SavedIdea::new(idea, user_id);
        saved.insert(0, record.clone());
        if let Err(e) = write_json(self.kv.as_ref(), keys::SAVED_IDEAS, &saved) {
            tracing::error!(error = %e, idea_id = %idea.idea_id, "failed to save idea");
        } else {
            tracing::info!(idea_id = %idea.idea_id, "idea saved");
        }
        record
    }

    /// Removes the saved record for `idea_id`, if any.
    pub fn remove_saved_idea(&self, idea_id: &IdeaId) {
        let _guard = self.saved_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut saved = self.saved_ideas();
        let before = saved.len();
        saved.retain(|s| &s.idea_id != idea_id);
        if saved.len() == before {
            return;
        }
        if let Err(e) = write_json(self.kv.as_ref(), keys::SAVED_IDEAS, &saved) {
            tracing::error!(error = %e, %idea_id, "failed to remove saved idea");
        } else {
            tracing::info!(%idea_id, "saved idea removed");
        }
    }

    /// Whether `idea_id` is saved.
    #[must_use]
    pub fn is_idea_saved(&self, idea_id: &IdeaId) -> bool {
        self.saved_ideas().iter().any(|s| &s.idea_id == idea_id)
    }

    /// Saved ideas whose embedded idea matches every field of `filters`.
    ///
    /// Records without an embedded idea never match.
    #[must_use]
    pub fn filter_saved_ideas(&self, filters: &FilterOptions) -> Vec<SavedIdea> {
        self.saved_ideas()
            .into_iter()
            .filter(|s| s.idea.as_ref().is_some_and(|idea| filters.matches(idea)))
            .collect()
    }

    /// Stored filter preferences, or empty filters.
    #[must_use]
    pub fn user_preferences(&self) -> FilterOptions {
        match read_json(self.kv.as_ref(), keys::USER_PREFERENCES) {
            Ok(prefs) => prefs.unwrap_or_default(),
            Err(e) => {
                tracing::error!(error = %e, "failed to load user preferences");
                FilterOptions::default()
            }
        }
    }

    /// Replaces the stored filter preferences.
    pub fn save_user_preferences(&self, preferences: &FilterOptions) {
        if let Err(e) = write_json(self.kv.as_ref(), keys::USER_PREFERENCES, preferences) {
            tracing::error!(error = %e, "failed to save user preferences");
        }
    }

    /// Whether the premium flag is set.
    #[must_use]
    pub fn is_premium_user(&self) -> bool {
        match self.kv.get(keys::PREMIUM_STATUS) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::error!(error = %e, "failed to read premium status");
                false
            }
        }
    }

    /// Sets or clears the premium flag.
    pub fn set_premium_status(&self, premium: bool) {
        if let Err(e) = self.kv.set(keys::PREMIUM_STATUS, premium.to_string()) {
            tracing::error!(error = %e, "failed to set premium status");
        }
    }
}

/// Reads and decodes the JSON value under `key`.
pub(crate) fn read_json<T: DeserializeOwned>(
    kv: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match kv.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encodes `value` as JSON and stores it under `key`.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    kv: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    kv.set(key, serde_json::to_string(value)?)
}
