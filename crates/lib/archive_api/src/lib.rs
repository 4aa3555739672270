//! # archive_api
//!
//! HTTP API library for Chat Archive.
//!
//! Three stub endpoints (`/ingest`, `/summarise`, `/chat`) behind a
//! route table, with permissive CORS headers on every response.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;

use axum::Router;
use axum::extract::DefaultBodyLimit;

use crate::config::ApiConfig;
use crate::handlers::fallback;
use crate::middleware::cors;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let routes = routes::table()
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            router.route(path, method_router.fallback(fallback::method_not_allowed))
        });

    routes
        .fallback(fallback::not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        // Preflight short-circuits inside the header layers so it gets them too.
        .layer(axum::middleware::from_fn(cors::preflight))
        .layer(cors::allow_origin())
        .layer(cors::allow_methods())
        .layer(cors::allow_headers())
        .with_state(state)
}
