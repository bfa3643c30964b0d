//! Stateless idea endpoints: generate, expand, share.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::IdeaPayload;
use crate::app_state::AppState;
use crate::domain::{FilterOptions, Idea};
use crate::error::{ErrorResponse, SparkError};
use crate::service::ShareLinks;

/// `POST /ideas/generate` — Generate an idea.
///
/// # Errors
///
/// Returns [`SparkError`] on a malformed body or unknown filter values.
#[utoipa::path(
    post,
    path = "/api/v1/ideas/generate",
    tag = "Ideas",
    summary = "Generate an idea",
    description = "Generates a startup idea constrained by the given filters. Falls back to a sample idea when the completion provider is unavailable.",
    request_body = FilterOptions,
    responses(
        (status = 200, description = "Generated idea", body = Idea),
        (status = 400, description = "Invalid filters", body = ErrorResponse),
    )
)]
pub async fn generate_idea(
    State(state): State<AppState>,
    body: Result<Json<FilterOptions>, JsonRejection>,
) -> Result<Json<Idea>, SparkError> {
    let Json(filters) = body.map_err(SparkError::from_filter_body)?;
    Ok(Json(state.ideas.generate(&filters).await))
}

/// `POST /ideas/expand` — Fill in the missing expansions of an idea.
///
/// # Errors
///
/// Returns [`SparkError::PremiumRequired`] without premium.
#[utoipa::path(
    post,
    path = "/api/v1/ideas/expand",
    tag = "Ideas",
    summary = "Expand an idea",
    description = "Requests only the fields the idea is missing (one-liner, description, market summary, validation tips). Premium only.",
    request_body = IdeaPayload,
    responses(
        (status = 200, description = "Expanded idea", body = Idea),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 403, description = "Premium required", body = ErrorResponse),
    )
)]
pub async fn expand_idea(
    State(state): State<AppState>,
    body: Result<Json<IdeaPayload>, JsonRejection>,
) -> Result<Json<Idea>, SparkError> {
    let Json(IdeaPayload { idea }) = body?;
    if !state.is_premium() {
        return Err(SparkError::PremiumRequired);
    }
    Ok(Json(state.ideas.expand_idea(&idea).await))
}

/// `POST /ideas/share` — Publish a frame for an idea.
///
/// # Errors
///
/// Returns [`SparkError::Storage`] if the frame snapshot cannot be stored.
#[utoipa::path(
    post,
    path = "/api/v1/ideas/share",
    tag = "Ideas",
    summary = "Share an idea",
    description = "Stores a frame snapshot and returns the frame URL plus a Warpcast composer link embedding it.",
    request_body = IdeaPayload,
    responses(
        (status = 200, description = "Share links", body = ShareLinks),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Snapshot could not be stored", body = ErrorResponse),
    )
)]
pub async fn share_idea(
    State(state): State<AppState>,
    body: Result<Json<IdeaPayload>, JsonRejection>,
) -> Result<Json<ShareLinks>, SparkError> {
    let Json(IdeaPayload { idea }) = body?;
    Ok(Json(state.frames.share(&idea)?))
}

/// Idea routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ideas/generate", post(generate_idea))
        .route("/ideas/expand", post(expand_idea))
        .route("/ideas/share", post(share_idea))
}
