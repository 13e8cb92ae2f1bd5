use std::sync::Arc;

use axum::{Json, Router, extract::DefaultBodyLimit, routing::get};
use error::ApiError;
use serde::{Deserialize, Serialize};
use state::{AppState, State};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

pub mod backend;
pub mod error;
mod openapi;
mod routes;
pub mod state;

pub use axum;
pub use openapi::ApiDoc;

/// Largest accepted request body. Data URIs inflate the raw image by about
/// a third, so this admits uploads of roughly 7.5 MB of image data.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn construct_router(state: Arc<State>) -> Router {
    let v1 = Router::new()
        .route("/", get(service_info))
        .nest("/health", routes::health::routes())
        .nest("/classify", routes::classify::routes())
        .route("/openapi.json", get(openapi_json));

    // nest() serves the inner "/" at "/api/v1" only; "/api/v1/" is a
    // distinct route.
    Router::new()
        .nest("/api/v1", v1)
        .route("/api/v1/", get(service_info))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
}

#[derive(Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub backend: backend::BackendMode,
}

#[tracing::instrument(name = "GET /", skip(state))]
async fn service_info(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<ServiceInfo>, ApiError> {
    Ok(Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.backend.mode(),
    }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
