use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Binwise API",
        version = "1.0.0",
        description = "Waste classification service. Images are scored by a deterministic in-process mock, or by an external model service when one is configured; the mock stays available as the fallback path.",
        license(name = "MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "classify", description = "Waste classification")
    ),
    paths(
        crate::routes::health::health,
        crate::routes::health::backend_health,
        crate::routes::classify::classify_image,
    ),
    components(schemas(
        binwise::Category,
        binwise::RecycleClass,
        binwise::UnifiedLabel,
        binwise::ScoredLabel,
        binwise::ClassificationResult,
        crate::backend::BackendMode,
        crate::routes::classify::ClassifyPayload,
        crate::routes::health::HealthResponse,
        crate::routes::health::BackendHealthResponse,
    ))
)]
pub struct ApiDoc;
