use crate::backend::BackendMode;
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::{Router, routing::get};
use binwise::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/backend", get(backend_health))
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BackendHealthResponse {
    pub status: String,
    pub mode: BackendMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub categories: Vec<Category>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[tracing::instrument(name = "GET /health")]
pub async fn health() -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/health/backend",
    tag = "health",
    responses(
        (status = 200, description = "Configured model backend and its label set", body = BackendHealthResponse)
    )
)]
#[tracing::instrument(name = "GET /health/backend", skip(state))]
pub async fn backend_health(
    State(state): State<AppState>,
) -> Result<Json<BackendHealthResponse>, ApiError> {
    Ok(Json(BackendHealthResponse {
        status: "ok".to_string(),
        mode: state.backend.mode(),
        url: state.backend.remote_url().map(str::to_string),
        categories: Category::ALL.to_vec(),
    }))
}
