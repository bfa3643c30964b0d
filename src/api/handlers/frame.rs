//! Public pages and Farcaster frame endpoints, mounted at the root.

use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;

use crate::api::dto::LandingQuery;
use crate::app_state::AppState;
use crate::domain::IdeaId;
use crate::error::{ErrorResponse, SparkError};
use crate::render;

/// Frame images change only when an idea is re-shared.
const IMAGE_CACHE_CONTROL: &str = "public, max-age=300";

const SAVED_MESSAGE: &str = "Idea saved successfully!";

fn parse_id(raw: &str) -> Result<IdeaId, SparkError> {
    IdeaId::parse(raw).ok_or_else(|| SparkError::InvalidRequest("empty idea id".to_string()))
}

/// `GET /frame/idea/{idea_id}` — Frame document for a shared idea.
///
/// # Errors
///
/// Returns [`SparkError::IdeaNotFound`] when no live snapshot exists.
#[utoipa::path(
    get,
    path = "/frame/idea/{idea_id}",
    tag = "Frames",
    summary = "Frame document",
    description = "HTML document with fc:frame and og meta tags for a shared idea.",
    params(("idea_id" = String, Path, description = "Idea identifier")),
    responses(
        (status = 200, description = "Frame document", content_type = "text/html", body = String),
        (status = 404, description = "Idea not found or expired", body = ErrorResponse),
    )
)]
pub async fn frame_document(
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
) -> Result<Html<String>, SparkError> {
    let idea_id = parse_id(&idea_id)?;
    Ok(Html(state.frames.frame_document(&idea_id)?))
}

/// `GET /frame/image/{idea_id}` — SVG card for a shared idea.
///
/// # Errors
///
/// Returns [`SparkError::IdeaNotFound`] when no live snapshot exists.
#[utoipa::path(
    get,
    path = "/frame/image/{idea_id}",
    tag = "Frames",
    summary = "Frame image",
    description = "1200x630 SVG preview of a shared idea. Cacheable for five minutes.",
    params(("idea_id" = String, Path, description = "Idea identifier")),
    responses(
        (status = 200, description = "SVG image", content_type = "image/svg+xml", body = String),
        (status = 404, description = "Idea not found or expired", body = ErrorResponse),
    )
)]
pub async fn frame_image(
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
) -> Result<impl IntoResponse, SparkError> {
    let idea_id = parse_id(&idea_id)?;
    let svg = state.frames.frame_image(&idea_id)?;
    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, IMAGE_CACHE_CONTROL),
        ],
        svg,
    ))
}

/// `GET /save/{idea_id}` — Save a shared idea and return to the app.
///
/// # Errors
///
/// Returns [`SparkError::IdeaNotFound`] when no live snapshot exists.
#[utoipa::path(
    get,
    path = "/save/{idea_id}",
    tag = "Frames",
    summary = "Save from frame",
    description = "Saves the shared idea for the session user, then redirects to the app with a notification.",
    params(("idea_id" = String, Path, description = "Idea identifier")),
    responses(
        (status = 303, description = "Redirect to the app"),
        (status = 404, description = "Idea not found or expired", body = ErrorResponse),
    )
)]
pub async fn save_from_frame(
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
) -> Result<Redirect, SparkError> {
    let idea_id = parse_id(&idea_id)?;
    let idea = state
        .frames
        .get_for_frame(&idea_id)
        .ok_or_else(|| SparkError::IdeaNotFound(idea_id.clone()))?;
    let saved = state.store.save_idea(&idea, &state.session.user_id);
    tracing::info!(idea_id = %saved.idea_id, "idea saved from frame");
    let target = state
        .frames
        .urls()
        .saved_notice(idea_id.as_str(), SAVED_MESSAGE);
    Ok(Redirect::to(&target))
}

/// `GET /idea/{idea_id}` — Detail page, the frame's "View Idea" target.
#[utoipa::path(
    get,
    path = "/idea/{idea_id}",
    tag = "Frames",
    summary = "Idea page",
    params(("idea_id" = String, Path, description = "Idea identifier")),
    responses(
        (status = 200, description = "Idea detail page", content_type = "text/html", body = String),
        (status = 404, description = "Not-found page", content_type = "text/html", body = String),
    )
)]
pub async fn idea_page(State(state): State<AppState>, Path(idea_id): Path<String>) -> Response {
    let urls = state.frames.urls();
    let idea = IdeaId::parse(&idea_id).and_then(|id| state.frames.get_for_frame(&id));
    match idea {
        Some(idea) => Html(render::render_idea_page(&idea, urls)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html(render::render_not_found_page(urls)),
        )
            .into_response(),
    }
}

/// `GET /` — Landing page.
#[utoipa::path(
    get,
    path = "/",
    tag = "Frames",
    summary = "Landing page",
    description = "Shows the `message` query parameter as a notification.",
    params(LandingQuery),
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String),
    )
)]
pub async fn landing(query: Result<Query<LandingQuery>, QueryRejection>) -> Html<String> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    Html(render::render_landing_page(query.message.as_deref()))
}

/// Public routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route("/frame/idea/{idea_id}", get(frame_document))
        .route("/frame/image/{idea_id}", get(frame_image))
        .route("/save/{idea_id}", get(save_from_frame))
        .route("/idea/{idea_id}", get(idea_page))
}
