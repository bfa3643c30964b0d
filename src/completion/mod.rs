//! Remote language-model completions.
//!
//! [`CompletionProvider`] is the seam between the idea service and the
//! network. [`OpenRouterClient`] speaks the OpenAI-compatible chat
//! completions API; [`OfflineProvider`] is used when no API key is
//! configured and fails every request, so callers fall back to their
//! static content without touching the network.

pub mod openrouter;
pub mod provider;

pub use openrouter::{OpenRouterClient, OpenRouterConfig};
pub use provider::{
    ChatMessage, ChatRole, CompletionError, CompletionProvider, CompletionRequest,
    OfflineProvider,
};
