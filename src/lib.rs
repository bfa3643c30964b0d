//! # ideaspark-gateway
//!
//! HTTP gateway for IdeaSpark: shake your phone, get a startup idea.
//!
//! This crate generates startup ideas through an OpenAI-compatible
//! completion API, keeps a saved list with filter preferences, and shares
//! ideas as Farcaster frames (an HTML document with `fc:frame` meta tags
//! plus an SVG preview). Device-motion shakes and touch swipes forwarded
//! by the web client are recognized server-side and drive the idea card.
//!
//! ## Architecture
//!
//! ```text
//! Clients (browser, Farcaster)
//!     │
//!     ├── REST + frame handlers (api/)
//!     │
//!     ├── IdeaDeck ── gesture detectors (gesture/)
//!     ├── IdeaService ── CompletionProvider (completion/)
//!     ├── FrameService ── HTML / SVG rendering (render/)
//!     │
//!     ├── IdeaStore, FrameSnapshotStore (storage/)
//!     │
//!     └── KeyValueStore (memory or JSON file)
//! ```
//!
//! Remote and storage failures degrade instead of failing requests:
//! generation falls back to a sample idea, expansions to static text, and
//! unreadable stores read as empty.

pub mod api;
pub mod app_state;
pub mod completion;
pub mod config;
pub mod domain;
pub mod error;
pub mod gesture;
pub mod render;
pub mod service;
pub mod storage;
