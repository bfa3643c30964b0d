//! REST endpoint handlers organized by resource.

pub mod deck;
pub mod frame;
pub mod ideas;
pub mod saved;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(ideas::routes())
        .merge(saved::routes())
        .merge(deck::routes())
}
