//! Route definitions and router construction.

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::routing::get;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Body of the plain-text 404 for unmatched routes.
pub const NOT_FOUND_BODY: &str = "404 - Not Found";

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// API routes without the `/api` prefix (for nesting under /api).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::movies::list))
        .route("/movies/search", get(handlers::movies::search))
}

/// Health and API routes with state applied, before any fallback.
fn base_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
}

/// Create the main Axum router with all API routes.
///
/// Unmatched paths answer with a plain-text 404. For serving the front end
/// as well, use [`create_static_router`].
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    base_router(ctx, cors_config)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Create a router with API routes and static asset serving.
///
/// API routes take priority. Any other path is looked up in `static_dir`;
/// missing files get the same plain-text 404 as [`create_router`].
pub fn create_static_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let serve_dir = ServeDir::new(static_dir.as_ref()).not_found_service(not_found.into_service());

    base_router(ctx, cors_config)
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

/// Catch-all for unmatched routes.
pub(crate) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
