//! Shared helpers for the router tests.
#![allow(dead_code, clippy::panic)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use chrono::TimeDelta;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

use ideaspark_gateway::api;
use ideaspark_gateway::app_state::AppState;
use ideaspark_gateway::completion::OfflineProvider;
use ideaspark_gateway::render::PublicUrls;
use ideaspark_gateway::service::{PremiumSource, Session};
use ideaspark_gateway::storage::MemoryStore;

/// Public base URL used by every test app.
pub const BASE: &str = "https://spark.example";

/// Builds the full application over an in-memory store and the offline
/// provider, so every generation and expansion takes the fallback path.
pub fn build_test_app(premium: PremiumSource) -> Router {
    api::build_app(test_state(premium))
}

/// State behind [`build_test_app`].
pub fn test_state(premium: PremiumSource) -> AppState {
    let Ok(base) = Url::parse(BASE) else {
        panic!("valid base url");
    };
    AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(OfflineProvider),
        PublicUrls::new(base),
        TimeDelta::hours(24),
        Session::new("tester", premium),
    )
}

/// Sends `request` through a clone of `app`.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    let Ok(response) = app.clone().oneshot(request).await else {
        panic!("router is infallible");
    };
    response
}

/// `GET uri`.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, Body::empty())).await
}

/// `DELETE uri`.
pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, request(Method::DELETE, uri, Body::empty())).await
}

/// Request with a JSON body.
pub async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> Response<Body> {
    send_raw_json(app, method, uri, body.to_string()).await
}

/// Request with a raw body labelled as JSON.
pub async fn send_raw_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: String,
) -> Response<Body> {
    let Ok(request) = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
    else {
        panic!("valid request");
    };
    send(app, request).await
}

fn request(method: Method, uri: &str, body: Body) -> Request<Body> {
    let Ok(request) = Request::builder().method(method).uri(uri).body(body) else {
        panic!("valid request");
    };
    request
}

/// Collects the body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("readable body");
    };
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Collects the body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let text = body_text(response).await;
    let Ok(value) = serde_json::from_str(&text) else {
        panic!("body is not JSON: {text}");
    };
    value
}

/// Value of a response header, if present and ASCII.
pub fn header_value<'a>(response: &'a Response<Body>, name: header::HeaderName) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}
