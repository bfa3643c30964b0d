//! Time-boxed idea snapshots backing the shareable frame routes.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::idea_store::{read_json, write_json};
use super::{KeyValueStore, keys};
use crate::domain::{Idea, IdeaId};

/// Default display window of a shared frame, in hours.
pub const DEFAULT_FRAME_TTL_HOURS: i64 = 24;

/// An idea captured for sharing, with its capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    /// The shared idea.
    pub idea: Idea,
    /// When the snapshot was taken.
    pub captured_at: DateTime<Utc>,
}

impl FrameSnapshot {
    /// Whether the snapshot is older than `ttl` at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now.signed_duration_since(self.captured_at) > ttl
    }
}

/// Map of idea id to [`FrameSnapshot`], stored under a single key.
///
/// Lookups treat snapshots older than the TTL as absent even while the
/// record still exists; expired records are pruned on the next write.
#[derive(Debug, Clone)]
pub struct FrameSnapshotStore {
    kv: Arc<dyn KeyValueStore>,
    ttl: TimeDelta,
}

impl FrameSnapshotStore {
    /// Creates a store with the given display window.
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>, ttl: TimeDelta) -> Self {
        Self { kv, ttl }
    }

    /// Display window.
    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Captures `idea` at `now`, replacing any earlier snapshot of it.
    ///
    /// Returns `false` if the snapshot could not be stored.
    pub fn put(&self, idea: &Idea, now: DateTime<Utc>) -> bool {
        let mut snapshots = self.load();
        snapshots.retain(|_, snap| !snap.is_expired(now, self.ttl));
        snapshots.insert(
            idea.idea_id.clone(),
            FrameSnapshot {
                idea: idea.clone(),
                captured_at: now,
            },
        );
        match write_json(self.kv.as_ref(), keys::FRAME_DATA, &snapshots) {
            Ok(()) => {
                tracing::debug!(idea_id = %idea.idea_id, live = snapshots.len(), "frame snapshot stored");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, idea_id = %idea.idea_id, "failed to store frame snapshot");
                false
            }
        }
    }

    /// The snapshot idea for `idea_id`, unless missing or expired at `now`.
    #[must_use]
    pub fn get(&self, idea_id: &IdeaId, now: DateTime<Utc>) -> Option<Idea> {
        let snapshot = self.load().remove(idea_id)?;
        if snapshot.is_expired(now, self.ttl) {
            tracing::debug!(%idea_id, captured_at = %snapshot.captured_at, "frame snapshot expired");
            return None;
        }
        Some(snapshot.idea)
    }

    fn load(&self) -> HashMap<IdeaId, FrameSnapshot> {
        match read_json(self.kv.as_ref(), keys::FRAME_DATA) {
            Ok(map) => map.unwrap_or_default(),
            Err(e) => {
                tracing::error!(error = %e, "failed to load frame snapshots");
                HashMap::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::storage::idea_store::tests::BrokenStore;

    fn ttl() -> TimeDelta {
        TimeDelta::hours(DEFAULT_FRAME_TTL_HOURS)
    }

    fn store() -> FrameSnapshotStore {
        FrameSnapshotStore::new(Arc::new(MemoryStore::new()), ttl())
    }

    #[test]
    fn snapshot_visible_inside_window() {
        let store = store();
        let idea = Idea::new("frame me");
        let now = Utc::now();
        assert!(store.put(&idea, now));

        let fetched = store.get(&idea.idea_id, now + TimeDelta::hours(23));
        assert_eq!(fetched.map(|i| i.raw_idea_text), Some("frame me".to_string()));
    }

    #[test]
    fn snapshot_absent_after_window_even_if_stored() {
        let kv = Arc::new(MemoryStore::new());
        let store = FrameSnapshotStore::new(Arc::clone(&kv) as Arc<dyn KeyValueStore>, ttl());
        let idea = Idea::new("stale");
        let now = Utc::now();
        assert!(store.put(&idea, now));

        let later = now + TimeDelta::hours(24) + TimeDelta::seconds(1);
        assert!(store.get(&idea.idea_id, later).is_none());

        let raw = kv.get(keys::FRAME_DATA).ok().flatten().unwrap_or_default();
        assert!(raw.contains(idea.idea_id.as_str()));
    }

    #[test]
    fn snapshots_are_keyed_per_idea() {
        let store = store();
        let a = Idea::new("a");
        let b = Idea::new("b");
        let now = Utc::now();
        assert!(store.put(&a, now));
        assert!(store.put(&b, now));
        assert!(store.get(&a.idea_id, now).is_some());
        assert!(store.get(&b.idea_id, now).is_some());
        assert!(store.get(&IdeaId::new(), now).is_none());
    }

    #[test]
    fn writes_prune_expired_snapshots() {
        let kv = Arc::new(MemoryStore::new());
        let store = FrameSnapshotStore::new(Arc::clone(&kv) as Arc<dyn KeyValueStore>, ttl());
        let old = Idea::new("old");
        let fresh = Idea::new("fresh");
        let t0 = Utc::now();
        assert!(store.put(&old, t0));
        assert!(store.put(&fresh, t0 + TimeDelta::hours(30)));

        let raw = kv.get(keys::FRAME_DATA).ok().flatten().unwrap_or_default();
        assert!(!raw.contains(old.idea_id.as_str()));
        assert!(raw.contains(fresh.idea_id.as_str()));
    }

    #[test]
    fn reshare_refreshes_capture_time() {
        let store = store();
        let idea = Idea::new("again");
        let t0 = Utc::now();
        assert!(store.put(&idea, t0));
        assert!(store.put(&idea, t0 + TimeDelta::hours(20)));
        assert!(store.get(&idea.idea_id, t0 + TimeDelta::hours(30)).is_some());
    }

    #[test]
    fn broken_backend_reports_absent() {
        let store = FrameSnapshotStore::new(Arc::new(BrokenStore), ttl());
        let idea = Idea::new("x");
        assert!(!store.put(&idea, Utc::now()));
        assert!(store.get(&idea.idea_id, Utc::now()).is_none());
    }
}
