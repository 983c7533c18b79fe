//! Routers: common endpoints and the content API.

mod common;
mod content;

pub use common::common_routes;
pub use content::content_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

/// Full application router: common routes at the root, content API under `/api/v1`.
///
/// CORS is outermost so preflights and rejected requests carry the allow headers.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/v1", content_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(CorsLayer::permissive())
}
