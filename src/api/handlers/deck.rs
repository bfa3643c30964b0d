//! Deck endpoints: the idea card driven by buttons and gestures.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::MotionPermissionUpdate;
use crate::app_state::AppState;
use crate::domain::{FilterOptions, Idea};
use crate::error::{ErrorResponse, SparkError};
use crate::service::{DeckSnapshot, InputEvent, InputOutcome, ShareLinks};

/// `GET /deck` — Current deck state.
#[utoipa::path(
    get,
    path = "/api/v1/deck",
    tag = "Deck",
    summary = "Deck state",
    responses(
        (status = 200, description = "Deck snapshot", body = DeckSnapshot),
    )
)]
pub async fn get_deck(State(state): State<AppState>) -> Json<DeckSnapshot> {
    Json(state.deck.snapshot())
}

/// `PUT /deck/filters` — Replace the active filters.
///
/// # Errors
///
/// Returns [`SparkError::InvalidFilter`] on unknown filter values.
#[utoipa::path(
    put,
    path = "/api/v1/deck/filters",
    tag = "Deck",
    summary = "Set deck filters",
    description = "Filters apply to the next generation and are persisted as preferences.",
    request_body = FilterOptions,
    responses(
        (status = 200, description = "Deck snapshot", body = DeckSnapshot),
        (status = 400, description = "Unknown filter value", body = ErrorResponse),
    )
)]
pub async fn put_filters(
    State(state): State<AppState>,
    body: Result<Json<FilterOptions>, JsonRejection>,
) -> Result<Json<DeckSnapshot>, SparkError> {
    let Json(filters) = body.map_err(SparkError::from_filter_body)?;
    state.deck.set_filters(filters);
    Ok(Json(state.deck.snapshot()))
}

/// `POST /deck/generate` — Generate the next idea onto the card.
///
/// # Errors
///
/// Returns [`SparkError::Busy`] while a generation is in flight.
#[utoipa::path(
    post,
    path = "/api/v1/deck/generate",
    tag = "Deck",
    summary = "Generate onto the card",
    responses(
        (status = 200, description = "New current idea", body = Idea),
        (status = 409, description = "Generation in progress", body = ErrorResponse),
    )
)]
pub async fn generate(State(state): State<AppState>) -> Result<Json<Idea>, SparkError> {
    Ok(Json(state.deck.generate().await?))
}

/// `POST /deck/expand` — Expand the idea on the card.
///
/// # Errors
///
/// Returns [`SparkError::PremiumRequired`], [`SparkError::NoCurrentIdea`]
/// or [`SparkError::Busy`].
#[utoipa::path(
    post,
    path = "/api/v1/deck/expand",
    tag = "Deck",
    summary = "Expand the current idea",
    responses(
        (status = 200, description = "Expanded idea", body = Idea),
        (status = 403, description = "Premium required", body = ErrorResponse),
        (status = 404, description = "No current idea", body = ErrorResponse),
        (status = 409, description = "Expansion in progress", body = ErrorResponse),
    )
)]
pub async fn expand(State(state): State<AppState>) -> Result<Json<Idea>, SparkError> {
    Ok(Json(state.deck.expand().await?))
}

/// `POST /deck/share` — Share the idea on the card.
///
/// # Errors
///
/// Returns [`SparkError::NoCurrentIdea`] on an empty card.
#[utoipa::path(
    post,
    path = "/api/v1/deck/share",
    tag = "Deck",
    summary = "Share the current idea",
    responses(
        (status = 200, description = "Share links", body = ShareLinks),
        (status = 404, description = "No current idea", body = ErrorResponse),
    )
)]
pub async fn share(State(state): State<AppState>) -> Result<Json<ShareLinks>, SparkError> {
    Ok(Json(state.deck.share_current()?))
}

/// `POST /deck/input` — Feed a raw motion or touch event.
///
/// # Errors
///
/// Returns [`SparkError::InvalidRequest`] on a malformed event.
#[utoipa::path(
    post,
    path = "/api/v1/deck/input",
    tag = "Deck",
    summary = "Raw input event",
    description = "Runs the event through the shake and swipe detectors. Shake generates, swipe right saves, swipe left discards and generates.",
    request_body = InputEvent,
    responses(
        (status = 200, description = "Recognized gesture and resulting state", body = InputOutcome),
        (status = 400, description = "Invalid event", body = ErrorResponse),
    )
)]
pub async fn input(
    State(state): State<AppState>,
    body: Result<Json<InputEvent>, JsonRejection>,
) -> Result<Json<InputOutcome>, SparkError> {
    let Json(event) = body?;
    Ok(Json(state.deck.handle_input(event).await))
}

/// `PUT /deck/motion-permission` — Record the platform permission result.
///
/// # Errors
///
/// Returns [`SparkError::InvalidRequest`] on a malformed body.
#[utoipa::path(
    put,
    path = "/api/v1/deck/motion-permission",
    tag = "Deck",
    summary = "Set motion permission",
    request_body = MotionPermissionUpdate,
    responses(
        (status = 200, description = "Deck snapshot", body = DeckSnapshot),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    )
)]
pub async fn put_motion_permission(
    State(state): State<AppState>,
    body: Result<Json<MotionPermissionUpdate>, JsonRejection>,
) -> Result<Json<DeckSnapshot>, SparkError> {
    let Json(update) = body?;
    state.deck.set_motion_permission(update.permission);
    tracing::info!(permission = ?update.permission, "motion permission updated");
    Ok(Json(state.deck.snapshot()))
}

/// Deck routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/deck", get(get_deck))
        .route("/deck/filters", put(put_filters))
        .route("/deck/generate", post(generate))
        .route("/deck/expand", post(expand))
        .route("/deck/share", post(share))
        .route("/deck/input", post(input))
        .route("/deck/motion-permission", put(put_motion_permission))
}
