use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::{Router, routing::post};
use binwise::ClassificationResult;
use serde::Deserialize;
use utoipa::ToSchema;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(classify_image))
}

/// Classification request: the image as a base64 data URI.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClassifyPayload {
    pub image: String,
}

#[utoipa::path(
    post,
    path = "/classify",
    tag = "classify",
    request_body = ClassifyPayload,
    responses(
        (status = 200, description = "Ranked classification result", body = ClassificationResult),
        (status = 400, description = "Payload is not an image data URI")
    )
)]
#[tracing::instrument(name = "POST /classify", skip(state, payload))]
pub async fn classify_image(
    State(state): State<AppState>,
    Json(payload): Json<ClassifyPayload>,
) -> Result<Json<ClassificationResult>, ApiError> {
    if !payload.image.starts_with("data:image/") {
        return Err(ApiError::bad_request("Invalid image"));
    }

    let result = match state.backend.classify(&payload.image).await {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!("Model backend failed, falling back to local mock: {}", err);
            binwise::classify(&payload.image)
        }
    };

    tracing::debug!(
        "Classified payload of {} bytes as {}",
        payload.image.len(),
        result.top.label
    );

    Ok(Json(result))
}
