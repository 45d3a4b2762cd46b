//! Aura Exotixx Storefront library.
//!
//! Server-rendered boutique: catalog browsing, a session bag, simulated
//! checkout and an admin console for the catalog and site copy. The
//! router is built here so the binary and the integration tests share it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod store;

use axum::{Router, extract::Request};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::StorefrontConfig;
use crate::state::AppState;

/// Build the full application router with its middleware stack.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.pool(), state.config());
    let static_dir = state.config().static_dir.clone();

    routes::routes()
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(session_layer)
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Open the database, create the schema and build the router.
///
/// # Errors
///
/// Returns `sqlx::Error` if the database cannot be opened or migrated.
pub async fn bootstrap(config: StorefrontConfig) -> Result<Router, sqlx::Error> {
    let pool = db::create_pool(&config.database_path).await?;
    db::migrate(&pool).await?;
    tracing::info!(path = %config.database_path.display(), "Database ready");

    Ok(app(AppState::new(config, pool)))
}
