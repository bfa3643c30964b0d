//! OpenAPI document for every REST and frame endpoint.

use axum::Router;
use utoipa::OpenApi;

use super::dto::{
    IdeaPayload, MotionPermissionUpdate, PremiumResponse, PremiumUpdate, SavedStatusResponse,
};
use super::handlers::{deck, frame, ideas, saved, system};
use crate::app_state::AppState;
use crate::domain::{FilterOptions, Idea, IdeaId, Industry, RevenueModel, SavedIdea, TechStack};
use crate::error::{ErrorBody, ErrorResponse};
use crate::gesture::{MotionPermission, SwipeDirection};
use crate::service::{
    DeckAction, DeckSnapshot, Gesture, InputEvent, InputOutcome, PremiumSource, ShareLinks,
};

/// Generated API description.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "IdeaSpark Gateway", description = "Startup idea generation, saved ideas and Farcaster frames."),
    paths(
        system::health_handler,
        frame::landing,
        frame::frame_document,
        frame::frame_image,
        frame::save_from_frame,
        frame::idea_page,
        ideas::generate_idea,
        ideas::expand_idea,
        ideas::share_idea,
        saved::list_saved,
        saved::save_idea,
        saved::saved_status,
        saved::remove_saved,
        saved::get_preferences,
        saved::put_preferences,
        saved::get_premium,
        saved::put_premium,
        deck::get_deck,
        deck::put_filters,
        deck::generate,
        deck::expand,
        deck::share,
        deck::input,
        deck::put_motion_permission,
    ),
    components(schemas(
        Idea,
        IdeaId,
        SavedIdea,
        FilterOptions,
        Industry,
        TechStack,
        RevenueModel,
        ShareLinks,
        IdeaPayload,
        SavedStatusResponse,
        PremiumUpdate,
        PremiumResponse,
        PremiumSource,
        MotionPermission,
        MotionPermissionUpdate,
        SwipeDirection,
        InputEvent,
        InputOutcome,
        Gesture,
        DeckAction,
        DeckSnapshot,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "System", description = "Health"),
        (name = "Frames", description = "Public pages and Farcaster frames"),
        (name = "Ideas", description = "Generation, expansion and sharing"),
        (name = "Saved Ideas", description = "The saved list"),
        (name = "Preferences", description = "Filter preferences and premium flag"),
        (name = "Deck", description = "The idea card"),
    )
)]
pub struct ApiDoc;

/// Serves the document, with Swagger UI when the `swagger-ui` feature is on.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}

/// Serves the document.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
