//! Persistence adapter: a key-value store with JSON-encoded values.
//!
//! [`KeyValueStore`] is the storage seam. [`IdeaStore`] and
//! [`FrameSnapshotStore`] sit on top of it and absorb every storage
//! failure: they log the error and hand back an empty/false default,
//! so callers never see a storage error.

pub mod frame_store;
pub mod idea_store;
pub mod kv;

pub use frame_store::{DEFAULT_FRAME_TTL_HOURS, FrameSnapshot, FrameSnapshotStore};
pub use idea_store::IdeaStore;
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};

/// Fixed, namespaced keys under which values are stored.
pub mod keys {
    /// JSON array of saved ideas, most recent first.
    pub const SAVED_IDEAS: &str = "ideaspark_saved_ideas";
    /// JSON object with the preferred filters.
    pub const USER_PREFERENCES: &str = "ideaspark_user_preferences";
    /// The string `"true"` or `"false"`.
    pub const PREMIUM_STATUS: &str = "ideaspark_premium_status";
    /// JSON object mapping idea id to frame snapshot.
    pub const FRAME_DATA: &str = "ideaspark_frame_data";
}
