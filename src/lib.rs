//! # Marquee - Movie Catalog API
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the health, root and movie endpoints
//! - [`models`] - The movie record, the catalog and shared application state
//! - [`error`] - Error type and JSON error responses
//! - [`config`] - Environment configuration
//! - [`telemetry`] - Tracing subscriber setup
//! - [`utils`] - Constants, seed data and static objects

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::error::handle_panic;
use crate::handlers::{api_info, get_movie, health_check, list_movies, not_found};
use crate::models::AppState;
use crate::utils::constant::*;
use crate::utils::static_object::CATALOG;

/// Creates an Axum router serving the built-in movie catalog.
///
/// This is a convenience function that calls [`app_with_state`] with the
/// process-wide [`CATALOG`].
#[inline]
pub fn app() -> Router {
    app_with_state(AppState::new(&CATALOG))
}

/// Creates an Axum router with application routes, state and middleware.
///
/// # Returns
///
/// A configured Axum router with all application routes and middleware
pub fn app_with_state(state: AppState) -> Router {
    info!(movies = state.catalog.len(), "Building router");

    let routes = Router::new()
        .route("/", get(api_info))
        .route(HEALTH_PATH, get(health_check))
        .route(MOVIES_PATH, get(list_movies))
        .route(MOVIE_PATH, get(get_movie))
        .fallback(not_found)
        .with_state(Arc::new(state));

    with_layers(routes)
}

/// Wraps a router in the middleware stack shared by every route.
///
/// # Layers
///
/// - CORS allowing any origin, method and header
/// - Request tracing
/// - Panic recovery rendering a JSON `500`
pub fn with_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
