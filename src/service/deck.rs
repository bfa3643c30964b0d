//! The idea deck: the swipeable card the user interacts with.
//!
//! [`IdeaDeck`] owns the current idea, the active filters and the
//! in-flight flags, and turns recognized gestures into actions:
//!
//! | Gesture      | Action                                 |
//! |--------------|----------------------------------------|
//! | shake        | generate a new idea                    |
//! | swipe right  | save the current idea                  |
//! | swipe left   | discard the current idea and generate  |
//! | swipe up/down| nothing                                |
//!
//! Generation and expansion are guarded by `AtomicBool` flags. A second
//! request while one is in flight is rejected with [`SparkError::Busy`]
//! rather than queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{FrameService, IdeaService, Session, ShareLinks};
use crate::domain::{FilterOptions, Idea, SavedIdea};
use crate::error::SparkError;
use crate::gesture::{
    MotionPermission, MotionSample, ShakeConfig, ShakeDetector, SwipeConfig, SwipeDetector,
    SwipeDirection, TouchPoint,
};
use crate::storage::IdeaStore;

/// Raw input forwarded by the front end.
///
/// `timestamp` is the client's event time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Device-motion sample (acceleration including gravity).
    Motion {
        /// X axis, if reported.
        x: Option<f64>,
        /// Y axis, if reported.
        y: Option<f64>,
        /// Z axis, if reported.
        z: Option<f64>,
        /// Event time in milliseconds.
        timestamp: u64,
    },
    /// First finger down.
    TouchStart {
        /// Horizontal position in px.
        x: f64,
        /// Vertical position in px.
        y: f64,
        /// Event time in milliseconds.
        timestamp: u64,
    },
    /// Finger lifted.
    TouchEnd {
        /// Horizontal position in px.
        x: f64,
        /// Vertical position in px.
        y: f64,
        /// Event time in milliseconds.
        timestamp: u64,
    },
    /// Touch interrupted by the platform.
    TouchCancel,
}

/// A recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Shake above threshold.
    Shake,
    /// Swipe in the given direction.
    Swipe(SwipeDirection),
}

/// What the deck did in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeckAction {
    /// No gesture, or a gesture with nothing to act on.
    None,
    /// A new idea was generated.
    Generated,
    /// The current idea was saved.
    Saved,
    /// The current idea was discarded and a new one generated.
    Discarded,
    /// A generation is already in flight.
    Busy,
}

/// Observable deck state.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeckSnapshot {
    /// Idea on the card, if any.
    pub current_idea: Option<Idea>,
    /// Whether the current idea is in the saved list.
    pub current_saved: bool,
    /// Filters applied to the next generation.
    pub filters: FilterOptions,
    /// A generation is in flight.
    pub is_generating: bool,
    /// An expansion is in flight.
    pub is_expanding: bool,
    /// Effective premium status.
    pub premium: bool,
    /// Last reported motion permission.
    pub motion_permission: MotionPermission,
}

/// Result of [`IdeaDeck::handle_input`].
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InputOutcome {
    /// Gesture recognized from the event, if any.
    pub gesture: Option<Gesture>,
    /// Action taken.
    pub action: DeckAction,
    /// Shake animation is active at the event time.
    pub shaking: bool,
    /// Deck state after the action.
    pub deck: DeckSnapshot,
}

#[derive(Debug)]
struct Gestures {
    shake: ShakeDetector,
    swipe: SwipeDetector,
}

/// Clears an in-flight flag when dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool, what: &'static str) -> Result<Self, SparkError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SparkError::Busy(what))?;
        Ok(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Presentation controller for the idea card.
#[derive(Debug)]
pub struct IdeaDeck {
    ideas: IdeaService,
    store: IdeaStore,
    frames: FrameService,
    session: Session,
    current: Mutex<Option<Idea>>,
    filters: Mutex<FilterOptions>,
    gestures: Mutex<Gestures>,
    generating: AtomicBool,
    expanding: AtomicBool,
}

impl IdeaDeck {
    /// Creates a deck with default gesture tuning. Filters start from the
    /// stored preferences.
    #[must_use]
    pub fn new(
        ideas: IdeaService,
        store: IdeaStore,
        frames: FrameService,
        session: Session,
    ) -> Self {
        Self::with_gestures(
            ideas,
            store,
            frames,
            session,
            ShakeConfig::default(),
            SwipeConfig::default(),
        )
    }

    /// Creates a deck with explicit gesture tuning.
    #[must_use]
    pub fn with_gestures(
        ideas: IdeaService,
        store: IdeaStore,
        frames: FrameService,
        session: Session,
        shake: ShakeConfig,
        swipe: SwipeConfig,
    ) -> Self {
        let filters = store.user_preferences();
        Self {
            ideas,
            store,
            frames,
            session,
            current: Mutex::new(None),
            filters: Mutex::new(filters),
            gestures: Mutex::new(Gestures {
                shake: ShakeDetector::new(shake),
                swipe: SwipeDetector::new(swipe),
            }),
            generating: AtomicBool::new(false),
            expanding: AtomicBool::new(false),
        }
    }

    /// Current deck state.
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        let current_idea = lock(&self.current).clone();
        let current_saved = current_idea
            .as_ref()
            .is_some_and(|idea| self.store.is_idea_saved(&idea.idea_id));
        DeckSnapshot {
            current_idea,
            current_saved,
            filters: *lock(&self.filters),
            is_generating: self.generating.load(Ordering::Acquire),
            is_expanding: self.expanding.load(Ordering::Acquire),
            premium: self.session.is_premium(&self.store),
            motion_permission: lock(&self.gestures).shake.permission(),
        }
    }

    /// Idea on the card, if any.
    #[must_use]
    pub fn current_idea(&self) -> Option<Idea> {
        lock(&self.current).clone()
    }

    /// Active filters.
    #[must_use]
    pub fn filters(&self) -> FilterOptions {
        *lock(&self.filters)
    }

    /// Replaces the active filters and persists them as preferences.
    pub fn set_filters(&self, filters: FilterOptions) {
        *lock(&self.filters) = filters;
        self.store.save_user_preferences(&filters);
        tracing::debug!(?filters, "deck filters updated");
    }

    /// Generates a new idea with the active filters and puts it on the card.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::Busy`] while another generation is in flight.
    pub async fn generate(&self) -> Result<Idea, SparkError> {
        let _guard = InFlight::acquire(&self.generating, "generation")?;
        let filters = self.filters();
        let idea = self.ideas.generate(&filters).await;
        *lock(&self.current) = Some(idea.clone());
        Ok(idea)
    }

    /// Fills in whatever the current idea is missing.
    ///
    /// The result is merged into the card only if the card still shows the
    /// same idea when the expansion completes.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::PremiumRequired`] without premium,
    /// [`SparkError::NoCurrentIdea`] on an empty card, and
    /// [`SparkError::Busy`] while another expansion is in flight.
    pub async fn expand(&self) -> Result<Idea, SparkError> {
        if !self.session.is_premium(&self.store) {
            return Err(SparkError::PremiumRequired);
        }
        let _guard = InFlight::acquire(&self.expanding, "expansion")?;
        let idea = self.current_idea().ok_or(SparkError::NoCurrentIdea)?;
        let expanded = self.ideas.expand_idea(&idea).await;
        let mut current = lock(&self.current);
        if current
            .as_ref()
            .is_some_and(|c| c.idea_id == expanded.idea_id)
        {
            *current = Some(expanded.clone());
        } else {
            tracing::debug!(idea_id = %expanded.idea_id, "card moved on, expansion not merged");
        }
        Ok(expanded)
    }

    /// Saves the current idea.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::NoCurrentIdea`] on an empty card.
    pub fn save_current(&self) -> Result<SavedIdea, SparkError> {
        let idea = self.current_idea().ok_or(SparkError::NoCurrentIdea)?;
        Ok(self.store.save_idea(&idea, &self.session.user_id))
    }

    /// Shares the current idea as a frame.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::NoCurrentIdea`] on an empty card, or the
    /// frame service's storage error.
    pub fn share_current(&self) -> Result<ShareLinks, SparkError> {
        let idea = self.current_idea().ok_or(SparkError::NoCurrentIdea)?;
        self.frames.share(&idea)
    }

    /// Records the platform's motion permission result.
    pub fn set_motion_permission(&self, permission: MotionPermission) {
        lock(&self.gestures).shake.set_permission(permission);
    }

    /// Feeds one raw input event through the detectors and acts on any
    /// recognized gesture.
    pub async fn handle_input(&self, event: InputEvent) -> InputOutcome {
        let (gesture, shaking) = self.recognize(event);
        let action = match gesture {
            Some(Gesture::Shake) => self.generate_action(DeckAction::Generated).await,
            Some(Gesture::Swipe(SwipeDirection::Right)) => match self.save_current() {
                Ok(saved) => {
                    tracing::info!(idea_id = %saved.idea_id, "idea saved by swipe");
                    DeckAction::Saved
                }
                Err(_) => DeckAction::None,
            },
            Some(Gesture::Swipe(SwipeDirection::Left)) => {
                if self.current_idea().is_some() {
                    self.generate_action(DeckAction::Discarded).await
                } else {
                    DeckAction::None
                }
            }
            Some(Gesture::Swipe(SwipeDirection::Up | SwipeDirection::Down)) | None => {
                DeckAction::None
            }
        };
        InputOutcome {
            gesture,
            action,
            shaking,
            deck: self.snapshot(),
        }
    }

    fn recognize(&self, event: InputEvent) -> (Option<Gesture>, bool) {
        let mut gestures = lock(&self.gestures);
        match event {
            InputEvent::Motion { x, y, z, timestamp } => {
                let fired = gestures
                    .shake
                    .on_motion(MotionSample { x, y, z }, timestamp);
                if let Some(shake) = fired {
                    tracing::debug!(magnitude = shake.magnitude, "shake detected");
                }
                (
                    fired.map(|_| Gesture::Shake),
                    gestures.shake.is_shaking(timestamp),
                )
            }
            InputEvent::TouchStart { x, y, timestamp } => {
                gestures.swipe.on_touch_start(TouchPoint::new(x, y), timestamp);
                (None, gestures.shake.is_shaking(timestamp))
            }
            InputEvent::TouchEnd { x, y, timestamp } => {
                let swipe = gestures.swipe.on_touch_end(TouchPoint::new(x, y), timestamp);
                if let Some(direction) = swipe {
                    tracing::debug!(?direction, "swipe detected");
                }
                (
                    swipe.map(Gesture::Swipe),
                    gestures.shake.is_shaking(timestamp),
                )
            }
            InputEvent::TouchCancel => {
                gestures.swipe.on_touch_cancel();
                (None, false)
            }
        }
    }

    async fn generate_action(&self, done: DeckAction) -> DeckAction {
        match self.generate().await {
            Ok(_) => done,
            Err(_) => DeckAction::Busy,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::TimeDelta;

    use super::*;
    use crate::completion::testing::ScriptedProvider;
    use crate::domain::Industry;
    use crate::render::links::tests::urls;
    use crate::service::PremiumSource;
    use crate::storage::{FrameSnapshotStore, KeyValueStore, MemoryStore};

    const GENERATOR: &str = "startup idea generator";

    fn deck_with(provider: ScriptedProvider, premium: PremiumSource) -> (Arc<IdeaDeck>, IdeaStore) {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let store = IdeaStore::new(Arc::clone(&kv));
        let frames = FrameService::new(
            FrameSnapshotStore::new(kv, TimeDelta::hours(24)),
            urls("https://spark.example"),
        );
        let deck = IdeaDeck::new(
            IdeaService::new(Arc::new(provider)),
            store.clone(),
            frames,
            Session::new("tester", premium),
        );
        (Arc::new(deck), store)
    }

    fn deck() -> (Arc<IdeaDeck>, IdeaStore) {
        deck_with(
            ScriptedProvider::new()
                .reply(GENERATOR, "Robot barista")
                .reply("one-liner", "Coffee by robots")
                .reply("detailed paragraph", "A longer story")
                .reply("market analysis", "Big market")
                .reply("validating", "Ask baristas"),
            PremiumSource::Stored,
        )
    }

    fn motion(magnitude: f64, timestamp: u64) -> InputEvent {
        InputEvent::Motion {
            x: Some(magnitude),
            y: Some(0.0),
            z: Some(0.0),
            timestamp,
        }
    }

    async fn swipe(deck: &IdeaDeck, dx: f64, start: u64) -> InputOutcome {
        deck.handle_input(InputEvent::TouchStart {
            x: 200.0,
            y: 300.0,
            timestamp: start,
        })
        .await;
        deck.handle_input(InputEvent::TouchEnd {
            x: 200.0 + dx,
            y: 310.0,
            timestamp: start + 100,
        })
        .await
    }

    #[tokio::test]
    async fn generate_puts_idea_on_card() {
        let (deck, _) = deck();
        let Ok(idea) = deck.generate().await else {
            panic!("generation should succeed");
        };
        assert_eq!(idea.raw_idea_text, "Robot barista");
        assert_eq!(deck.current_idea(), Some(idea));
        assert!(!deck.snapshot().is_generating);
    }

    #[tokio::test]
    async fn generate_uses_active_filters() {
        let (deck, store) = deck();
        let filters = FilterOptions {
            industry: Some(Industry::Healthtech),
            ..FilterOptions::default()
        };
        deck.set_filters(filters);
        assert_eq!(store.user_preferences(), filters);
        let Ok(idea) = deck.generate().await else {
            panic!("generation should succeed");
        };
        assert_eq!(idea.industry.as_deref(), Some("healthtech"));
    }

    #[tokio::test]
    async fn filters_start_from_preferences() {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let store = IdeaStore::new(Arc::clone(&kv));
        let filters = FilterOptions {
            industry: Some(Industry::Fintech),
            ..FilterOptions::default()
        };
        store.save_user_preferences(&filters);
        let frames = FrameService::new(
            FrameSnapshotStore::new(kv, TimeDelta::hours(24)),
            urls("https://spark.example"),
        );
        let deck = IdeaDeck::new(
            IdeaService::new(Arc::new(ScriptedProvider::new())),
            store,
            frames,
            Session::default(),
        );
        assert_eq!(deck.filters(), filters);
    }

    #[tokio::test]
    async fn concurrent_generation_is_busy() {
        let (deck, _) = deck_with(
            ScriptedProvider::new()
                .reply(GENERATOR, "slow idea")
                .delayed(Duration::from_millis(200)),
            PremiumSource::Stored,
        );
        let first = {
            let deck = Arc::clone(&deck);
            tokio::spawn(async move { deck.generate().await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(deck.snapshot().is_generating);
        assert!(matches!(
            deck.generate().await,
            Err(SparkError::Busy("generation"))
        ));
        let Ok(Ok(idea)) = first.await else {
            panic!("first generation should finish");
        };
        assert_eq!(idea.raw_idea_text, "slow idea");
        assert!(!deck.snapshot().is_generating);
    }

    #[tokio::test]
    async fn expand_requires_premium() {
        let (deck, store) = deck();
        assert!(matches!(
            deck.expand().await,
            Err(SparkError::PremiumRequired)
        ));
        store.set_premium_status(true);
        assert!(matches!(deck.expand().await, Err(SparkError::NoCurrentIdea)));
    }

    #[tokio::test]
    async fn expand_merges_into_card() {
        let (deck, _) = deck_with(
            ScriptedProvider::new()
                .reply(GENERATOR, "Robot barista")
                .reply("one-liner", "Coffee by robots"),
            PremiumSource::Fixed(true),
        );
        assert!(deck.generate().await.is_ok());
        let Ok(expanded) = deck.expand().await else {
            panic!("expansion should succeed");
        };
        assert_eq!(expanded.one_liner.as_deref(), Some("Coffee by robots"));
        // unmatched kinds fall back to static text
        assert!(expanded.description.is_some());
        assert_eq!(deck.current_idea(), Some(expanded));
        assert!(!deck.snapshot().is_expanding);
    }

    #[tokio::test]
    async fn save_and_share_need_an_idea() {
        let (deck, _) = deck();
        assert!(matches!(deck.save_current(), Err(SparkError::NoCurrentIdea)));
        assert!(matches!(deck.share_current(), Err(SparkError::NoCurrentIdea)));

        assert!(deck.generate().await.is_ok());
        let Ok(saved) = deck.save_current() else {
            panic!("save should succeed");
        };
        assert_eq!(saved.user_id, "tester");
        assert!(deck.snapshot().current_saved);
        let Ok(links) = deck.share_current() else {
            panic!("share should succeed");
        };
        assert!(links.frame_url.ends_with(saved.idea_id.as_str()));
    }

    #[tokio::test]
    async fn shake_generates_once_per_cooldown() {
        let (deck, _) = deck();
        let first = deck.handle_input(motion(20.0, 1_000)).await;
        assert_eq!(first.gesture, Some(Gesture::Shake));
        assert_eq!(first.action, DeckAction::Generated);
        assert!(first.shaking);
        assert!(first.deck.current_idea.is_some());

        let repeat = deck.handle_input(motion(20.0, 1_100)).await;
        assert_eq!(repeat.gesture, None);
        assert_eq!(repeat.action, DeckAction::None);

        let weak = deck.handle_input(motion(5.0, 3_000)).await;
        assert_eq!(weak.gesture, None);
        assert!(!weak.shaking);
    }

    #[tokio::test]
    async fn denied_permission_mutes_shake() {
        let (deck, _) = deck();
        deck.set_motion_permission(MotionPermission::Denied);
        let outcome = deck.handle_input(motion(30.0, 1_000)).await;
        assert_eq!(outcome.gesture, None);
        assert_eq!(outcome.deck.motion_permission, MotionPermission::Denied);
        assert!(outcome.deck.current_idea.is_none());
    }

    #[tokio::test]
    async fn swipe_right_saves() {
        let (deck, store) = deck();
        assert!(deck.generate().await.is_ok());
        let outcome = swipe(&deck, 150.0, 5_000).await;
        assert_eq!(outcome.gesture, Some(Gesture::Swipe(SwipeDirection::Right)));
        assert_eq!(outcome.action, DeckAction::Saved);
        assert!(outcome.deck.current_saved);
        assert_eq!(store.saved_ideas().len(), 1);
    }

    #[tokio::test]
    async fn swipe_left_discards_and_generates() {
        let (deck, store) = deck();
        let Ok(before) = deck.generate().await else {
            panic!("generation should succeed");
        };
        let outcome = swipe(&deck, -150.0, 5_000).await;
        assert_eq!(outcome.action, DeckAction::Discarded);
        let Some(after) = outcome.deck.current_idea else {
            panic!("card should hold a new idea");
        };
        assert_ne!(after.idea_id, before.idea_id);
        assert!(store.saved_ideas().is_empty());
    }

    #[tokio::test]
    async fn swipes_on_empty_card_do_nothing() {
        let (deck, store) = deck();
        assert_eq!(swipe(&deck, 150.0, 1_000).await.action, DeckAction::None);
        assert_eq!(swipe(&deck, -150.0, 2_000).await.action, DeckAction::None);
        assert!(deck.current_idea().is_none());
        assert!(store.saved_ideas().is_empty());
    }

    #[tokio::test]
    async fn cancelled_touch_does_not_swipe() {
        let (deck, _) = deck();
        assert!(deck.generate().await.is_ok());
        deck.handle_input(InputEvent::TouchStart {
            x: 0.0,
            y: 0.0,
            timestamp: 0,
        })
        .await;
        deck.handle_input(InputEvent::TouchCancel).await;
        let outcome = deck
            .handle_input(InputEvent::TouchEnd {
                x: 300.0,
                y: 0.0,
                timestamp: 50,
            })
            .await;
        assert_eq!(outcome.gesture, None);
    }

    #[test]
    fn input_event_wire_format() {
        let Ok(event) = serde_json::from_str::<InputEvent>(
            r#"{"type":"touch_end","x":1.5,"y":2.0,"timestamp":42}"#,
        ) else {
            panic!("touch_end should parse");
        };
        assert_eq!(
            event,
            InputEvent::TouchEnd {
                x: 1.5,
                y: 2.0,
                timestamp: 42
            }
        );
        let Ok(event) = serde_json::from_str::<InputEvent>(
            r#"{"type":"motion","x":null,"y":1.0,"z":2.0,"timestamp":7}"#,
        ) else {
            panic!("motion should parse");
        };
        assert!(matches!(event, InputEvent::Motion { x: None, .. }));
        assert!(serde_json::from_str::<InputEvent>(r#"{"type":"touch_cancel"}"#).is_ok());
    }
}
