//! Top-level router configuration combining HTML pages and the JSON API.
//!
//! # Route Structure
//!
//! - `GET  /`            - Home page with record counts
//! - `/{slug}/*`         - List, form and delete pages per collection
//! - `/api/{slug}/*`     - REST API per collection
//! - `GET  /health`      - Health check with record counts
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/clients/` serves the
/// same page as `/clients`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
