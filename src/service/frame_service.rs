//! Frame sharing: snapshot storage plus the public links around it.

use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Idea, IdeaId};
use crate::error::SparkError;
use crate::render::{self, PublicUrls};
use crate::storage::FrameSnapshotStore;

/// Links returned when an idea is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinks {
    /// Public frame document for the idea.
    pub frame_url: String,
    /// Farcaster composer prefilled with the share text and frame embed.
    pub compose_url: String,
}

/// Composes the cast text for a shared idea.
#[must_use]
pub fn share_text(idea: &Idea) -> String {
    format!(
        "🚀 Just got this startup idea from IdeaSpark: \"{}\"\n\n#startup #entrepreneur #ideaspark",
        idea.headline()
    )
}

/// Stores frame snapshots and renders the artifacts served for them.
#[derive(Debug, Clone)]
pub struct FrameService {
    snapshots: FrameSnapshotStore,
    urls: PublicUrls,
}

impl FrameService {
    /// Creates a frame service over a snapshot store.
    #[must_use]
    pub const fn new(snapshots: FrameSnapshotStore, urls: PublicUrls) -> Self {
        Self { snapshots, urls }
    }

    /// Public URL builder.
    #[must_use]
    pub const fn urls(&self) -> &PublicUrls {
        &self.urls
    }

    /// Snapshots `idea` and returns its frame URL.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::Storage`] if the snapshot could not be written;
    /// handing out a URL that resolves to nothing would be worse.
    pub fn create_frame(&self, idea: &Idea) -> Result<String, SparkError> {
        if !self.snapshots.put(idea, Utc::now()) {
            return Err(SparkError::Storage(format!(
                "could not store frame for idea {}",
                idea.idea_id
            )));
        }
        let frame_url = self.urls.frame_document(idea.idea_id.as_str());
        tracing::info!(idea_id = %idea.idea_id, %frame_url, "frame created");
        Ok(frame_url)
    }

    /// Creates the frame and the composer link for `idea`.
    ///
    /// # Errors
    ///
    /// See [`FrameService::create_frame`].
    pub fn share(&self, idea: &Idea) -> Result<ShareLinks, SparkError> {
        let frame_url = self.create_frame(idea)?;
        let compose_url = PublicUrls::compose(&share_text(idea), &frame_url);
        Ok(ShareLinks {
            frame_url,
            compose_url,
        })
    }

    /// Live snapshot for `idea_id`, if any.
    #[must_use]
    pub fn get_for_frame(&self, idea_id: &IdeaId) -> Option<Idea> {
        self.snapshots.get(idea_id, Utc::now())
    }

    /// Frame HTML document for a live snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::IdeaNotFound`] when the snapshot is missing or
    /// expired.
    pub fn frame_document(&self, idea_id: &IdeaId) -> Result<String, SparkError> {
        let idea = self.require(idea_id)?;
        Ok(render::render_frame_document(&idea, &self.urls))
    }

    /// Frame SVG image for a live snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::IdeaNotFound`] when the snapshot is missing or
    /// expired.
    pub fn frame_image(&self, idea_id: &IdeaId) -> Result<String, SparkError> {
        let idea = self.require(idea_id)?;
        Ok(render::render_frame_image(&idea))
    }

    fn require(&self, idea_id: &IdeaId) -> Result<Idea, SparkError> {
        self.get_for_frame(idea_id).ok_or_else(|| {
            tracing::debug!(%idea_id, "frame snapshot missing or expired");
            SparkError::IdeaNotFound(idea_id.clone())
        })
    }
}
