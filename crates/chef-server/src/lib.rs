//! ChefBot HTTP API server (Axum).
//!
//! Relays chat messages to the upstream model with per-session history, and
//! exposes history/clear/health endpoints. Every response body is JSON.

pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

use axum::response::{IntoResponse, Response};
use axum::Router;
use state::AppState;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Version reported by `GET /`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the application router with the given state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::info_routes())
        .merge(routes::chat_routes())
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    error::ApiError::internal("An unexpected error occurred on the server").into_response()
}
