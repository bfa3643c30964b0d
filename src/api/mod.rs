//! REST API layer: route handlers, DTOs, and router composition.
//!
//! JSON endpoints are mounted under `/api/v1`; the frame and page routes
//! that Farcaster clients and browsers follow live at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::SparkError;

/// Builds the complete API router with all endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::frame::routes())
        .merge(handlers::system::routes())
}

/// Builds the served application: routes, docs and middleware.
///
/// Used by the binary and by the router tests so both exercise the same
/// stack.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(build_router())
        .merge(openapi::routes())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(panic = %detail, "handler panicked");
    SparkError::Internal("handler panicked".to_string()).into_response()
}
