//! Router assembly.

mod api;
mod common;

pub use api::{api_routes, ApiDoc};
pub use common::common_routes_with_ready;

use crate::state::AppState;
use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// The whole service: resources under `/api`, operational routes at the root,
/// any origin allowed, every request traced.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api", api_routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
