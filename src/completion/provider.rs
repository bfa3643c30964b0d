//! Provider-neutral completion request types and the provider trait.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors from a completion provider.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// No API key is configured.
    #[error("completion provider is not configured")]
    NotConfigured,

    /// The HTTP request failed (network, DNS, TLS, timeout, decoding).
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("completion provider error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The provider answered without any content.
    #[error("completion provider returned no content")]
    EmptyResponse,
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Instructions framing the conversation.
    System,
    /// End-user input.
    User,
    /// Model output.
    Assistant,
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author.
    pub role: ChatRole,
    /// Text content.
    pub content: String,
}

impl ChatMessage {
    /// System message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// User message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A single-shot chat completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Conversation, usually one system and one user message.
    pub messages: Vec<ChatMessage>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl CompletionRequest {
    /// Builds a system + user request.
    #[must_use]
    pub fn new(system: &str, user: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens,
            temperature,
        }
    }

    /// Content of the first system message.
    #[must_use]
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == ChatRole::System)
            .map(|m| m.content.as_str())
    }

    /// Content of the last user message.
    #[must_use]
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
    }
}

/// Something that can turn a chat into generated text.
#[async_trait]
pub trait CompletionProvider: Send + Sync + fmt::Debug {
    /// Runs one completion and returns the generated text, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError`] on transport failure, a non-success
    /// status, or an empty answer.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

/// Provider used when no API key is configured. Every request fails with
/// [`CompletionError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

#[async_trait]
impl CompletionProvider for OfflineProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::NotConfigured)
    }
}
