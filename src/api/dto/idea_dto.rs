//! Request and response envelopes for the idea, saved-idea and deck
//! endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Idea, IdeaId};
use crate::gesture::MotionPermission;
use crate::service::PremiumSource;

/// Body carrying a full idea.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IdeaPayload {
    /// The idea to act on.
    pub idea: Idea,
}

/// Whether an idea is in the saved list.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedStatusResponse {
    /// Idea identifier.
    pub idea_id: IdeaId,
    /// `true` if saved.
    pub saved: bool,
}

/// Body of `PUT /premium`.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct PremiumUpdate {
    /// New stored premium flag.
    pub premium: bool,
}

/// Effective premium status.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct PremiumResponse {
    /// Whether premium features are unlocked.
    pub premium: bool,
    /// Where the status comes from.
    pub source: PremiumSource,
}

/// Body of `PUT /deck/motion-permission`.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct MotionPermissionUpdate {
    /// Platform permission result.
    pub permission: MotionPermission,
}

/// Query string of the landing page after a frame save redirect.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LandingQuery {
    /// Id of the idea that was just saved.
    pub saved: Option<String>,
    /// Notification text to show.
    pub message: Option<String>,
}
