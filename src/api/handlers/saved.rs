//! Saved ideas, filter preferences and the premium flag.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{IdeaPayload, PremiumResponse, PremiumUpdate, SavedStatusResponse};
use crate::app_state::AppState;
use crate::domain::{FilterOptions, IdeaId, SavedIdea};
use crate::error::{ErrorResponse, SparkError};

fn parse_id(raw: &str) -> Result<IdeaId, SparkError> {
    IdeaId::parse(raw).ok_or_else(|| SparkError::InvalidRequest("empty idea id".to_string()))
}

/// `GET /saved-ideas` — List saved ideas, newest first.
///
/// # Errors
///
/// Returns [`SparkError::InvalidFilter`] on unknown filter values.
#[utoipa::path(
    get,
    path = "/api/v1/saved-ideas",
    tag = "Saved Ideas",
    summary = "List saved ideas",
    description = "Returns saved ideas, most recent first. Every given filter must match; omitted or empty filters match everything.",
    params(FilterOptions),
    responses(
        (status = 200, description = "Saved ideas", body = Vec<SavedIdea>),
        (status = 400, description = "Unknown filter value", body = ErrorResponse),
    )
)]
pub async fn list_saved(
    State(state): State<AppState>,
    query: Result<Query<FilterOptions>, QueryRejection>,
) -> Result<Json<Vec<SavedIdea>>, SparkError> {
    let Query(filters) = query?;
    Ok(Json(state.store.filter_saved_ideas(&filters)))
}

/// `POST /saved-ideas` — Save an idea. Saving twice keeps one record.
///
/// # Errors
///
/// Returns [`SparkError::InvalidRequest`] on a malformed body.
#[utoipa::path(
    post,
    path = "/api/v1/saved-ideas",
    tag = "Saved Ideas",
    summary = "Save an idea",
    request_body = IdeaPayload,
    responses(
        (status = 201, description = "Saved record", body = SavedIdea),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn save_idea(
    State(state): State<AppState>,
    body: Result<Json<IdeaPayload>, JsonRejection>,
) -> Result<impl IntoResponse, SparkError> {
    let Json(IdeaPayload { idea }) = body?;
    let saved = state.store.save_idea(&idea, &state.session.user_id);
    Ok((StatusCode::CREATED, Json(saved)))
}

/// `GET /saved-ideas/{idea_id}` — Whether an idea is saved.
///
/// # Errors
///
/// Returns [`SparkError::InvalidRequest`] on an empty id.
#[utoipa::path(
    get,
    path = "/api/v1/saved-ideas/{idea_id}",
    tag = "Saved Ideas",
    summary = "Saved status",
    params(("idea_id" = String, Path, description = "Idea identifier")),
    responses(
        (status = 200, description = "Saved status", body = SavedStatusResponse),
    )
)]
pub async fn saved_status(
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
) -> Result<Json<SavedStatusResponse>, SparkError> {
    let idea_id = parse_id(&idea_id)?;
    let saved = state.store.is_idea_saved(&idea_id);
    Ok(Json(SavedStatusResponse { idea_id, saved }))
}

/// `DELETE /saved-ideas/{idea_id}` — Remove a saved idea. Removing an
/// unknown id is a no-op.
///
/// # Errors
///
/// Returns [`SparkError::InvalidRequest`] on an empty id.
#[utoipa::path(
    delete,
    path = "/api/v1/saved-ideas/{idea_id}",
    tag = "Saved Ideas",
    summary = "Remove a saved idea",
    params(("idea_id" = String, Path, description = "Idea identifier")),
    responses(
        (status = 204, description = "Removed"),
    )
)]
pub async fn remove_saved(
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
) -> Result<StatusCode, SparkError> {
    let idea_id = parse_id(&idea_id)?;
    state.store.remove_saved_idea(&idea_id);
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /preferences` — Stored filter preferences.
#[utoipa::path(
    get,
    path = "/api/v1/preferences",
    tag = "Preferences",
    summary = "Get preferences",
    responses(
        (status = 200, description = "Stored filters", body = FilterOptions),
    )
)]
pub async fn get_preferences(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(state.store.user_preferences())
}

/// `PUT /preferences` — Replace filter preferences.
///
/// # Errors
///
/// Returns [`SparkError::InvalidFilter`] on unknown filter values.
#[utoipa::path(
    put,
    path = "/api/v1/preferences",
    tag = "Preferences",
    summary = "Set preferences",
    request_body = FilterOptions,
    responses(
        (status = 200, description = "Stored filters", body = FilterOptions),
        (status = 400, description = "Unknown filter value", body = ErrorResponse),
    )
)]
pub async fn put_preferences(
    State(state): State<AppState>,
    body: Result<Json<FilterOptions>, JsonRejection>,
) -> Result<Json<FilterOptions>, SparkError> {
    let Json(preferences) = body.map_err(SparkError::from_filter_body)?;
    state.store.save_user_preferences(&preferences);
    Ok(Json(preferences))
}

/// `GET /premium` — Effective premium status.
#[utoipa::path(
    get,
    path = "/api/v1/premium",
    tag = "Preferences",
    summary = "Get premium status",
    responses(
        (status = 200, description = "Premium status", body = PremiumResponse),
    )
)]
pub async fn get_premium(State(state): State<AppState>) -> Json<PremiumResponse> {
    Json(premium_response(&state))
}

/// `PUT /premium` — Set the stored premium flag.
///
/// A configured override still wins; the response reports the effective
/// status.
///
/// # Errors
///
/// Returns [`SparkError::InvalidRequest`] on a malformed body.
#[utoipa::path(
    put,
    path = "/api/v1/premium",
    tag = "Preferences",
    summary = "Set premium status",
    request_body = PremiumUpdate,
    responses(
        (status = 200, description = "Effective premium status", body = PremiumResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn put_premium(
    State(state): State<AppState>,
    body: Result<Json<PremiumUpdate>, JsonRejection>,
) -> Result<Json<PremiumResponse>, SparkError> {
    let Json(update) = body?;
    state.store.set_premium_status(update.premium);
    Ok(Json(premium_response(&state)))
}

fn premium_response(state: &AppState) -> PremiumResponse {
    PremiumResponse {
        premium: state.is_premium(),
        source: state.session.premium,
    }
}

/// Saved-idea, preference and premium routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/saved-ideas", get(list_saved).post(save_idea))
        .route(
            "/saved-ideas/{idea_id}",
            get(saved_status).delete(remove_saved),
        )
        .route("/preferences", get(get_preferences).put(put_preferences))
        .route("/premium", get(get_premium).put(put_premium))
}
