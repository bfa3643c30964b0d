//! Service layer: business logic orchestration.
//!
//! [`IdeaService`] talks to the completion provider, [`FrameService`]
//! manages shared frames, and [`IdeaDeck`] drives the idea card from
//! gestures on top of both and the [`crate::storage::IdeaStore`].

pub mod deck;
pub mod frame_service;
pub mod idea_service;
pub mod session;

pub use deck::{DeckAction, DeckSnapshot, Gesture, IdeaDeck, InputEvent, InputOutcome};
pub use frame_service::{FrameService, ShareLinks, share_text};
pub use idea_service::IdeaService;
pub use session::{PremiumSource, Session};
