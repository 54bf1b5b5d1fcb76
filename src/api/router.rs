//! HTTP router.
//!
//! API routes are nested under `/api/`. Everything else falls through to
//! the static web directory, which serves `index.html` at `/`.
//!
//! Layers (outermost first): CORS, request logging, then on `/api` the
//! body limit and `Cache-Control: no-store`.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the full application router.
pub fn api_router(ctx: ApiContext) -> Router {
    let max_report_bytes = ctx.config.max_report_bytes;
    let web_dir = ctx.config.web_dir.clone();

    let api = Router::new()
        .route("/summarize", post(endpoints::summarize::summarize))
        .route("/narrative", post(endpoints::narrative::narrate))
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(max_report_bytes))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(web_dir))
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(CorsLayer::permissive())
}
