//! Absolute links built from the public base URL.

use url::Url;
use url::form_urlencoded::byte_serialize;

/// Farcaster web composer.
pub const COMPOSE_URL: &str = "https://warpcast.com/~/compose";

/// Builds every absolute URL that appears in shared artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUrls {
    base: Url,
}

impl PublicUrls {
    /// Wraps an already validated base URL.
    #[must_use]
    pub const fn new(base: Url) -> Self {
        Self { base }
    }

    /// Application root without a trailing slash, e.g. `https://app.example`.
    #[must_use]
    pub fn root(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }

    /// `{base}/frame/idea/{id}`.
    #[must_use]
    pub fn frame_document(&self, idea_id: &str) -> String {
        self.join(&["frame", "idea", idea_id])
    }

    /// `{base}/frame/image/{id}`.
    #[must_use]
    pub fn frame_image(&self, idea_id: &str) -> String {
        self.join(&["frame", "image", idea_id])
    }

    /// `{base}/idea/{id}`.
    #[must_use]
    pub fn idea_page(&self, idea_id: &str) -> String {
        self.join(&["idea", idea_id])
    }

    /// `{base}/save/{id}`.
    #[must_use]
    pub fn save(&self, idea_id: &str) -> String {
        self.join(&["save", idea_id])
    }

    /// Application root carrying the `saved` and `message` notification
    /// parameters.
    #[must_use]
    pub fn saved_notice(&self, idea_id: &str, message: &str) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("saved", idea_id)
            .append_pair("message", message);
        url.to_string()
    }

    /// Composer link pre-filled with `text` and embedding `embed_url`.
    #[must_use]
    pub fn compose(text: &str, embed_url: &str) -> String {
        let text: String = byte_serialize(text.as_bytes()).collect();
        let embed: String = byte_serialize(embed_url.as_bytes()).collect();
        format!("{COMPOSE_URL}?text={text}&embeds[]={embed}")
    }

    fn join(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }
}
