//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use chrono::TimeDelta;

use crate::completion::CompletionProvider;
use crate::render::PublicUrls;
use crate::service::{FrameService, IdeaDeck, IdeaService, Session};
use crate::storage::{FrameSnapshotStore, IdeaStore, KeyValueStore};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Idea generation and expansion.
    pub ideas: Arc<IdeaService>,
    /// Saved ideas, preferences and the premium flag.
    pub store: Arc<IdeaStore>,
    /// Frame snapshots and sharing links.
    pub frames: Arc<FrameService>,
    /// The idea card.
    pub deck: Arc<IdeaDeck>,
    /// Session identity and entitlements.
    pub session: Arc<Session>,
}

impl AppState {
    /// Wires every service on top of one key-value store and one
    /// completion provider.
    #[must_use]
    pub fn new(
        kv: Arc<dyn KeyValueStore>,
        provider: Arc<dyn CompletionProvider>,
        urls: PublicUrls,
        frame_ttl: TimeDelta,
        session: Session,
    ) -> Self {
        let ideas = IdeaService::new(provider);
        let store = IdeaStore::new(Arc::clone(&kv));
        let frames = FrameService::new(FrameSnapshotStore::new(kv, frame_ttl), urls);
        let deck = IdeaDeck::new(
            ideas.clone(),
            store.clone(),
            frames.clone(),
            session.clone(),
        );
        Self {
            ideas: Arc::new(ideas),
            store: Arc::new(store),
            frames: Arc::new(frames),
            deck: Arc::new(deck),
            session: Arc::new(session),
        }
    }

    /// Effective premium status for this session.
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.session.is_premium(&self.store)
    }
}
