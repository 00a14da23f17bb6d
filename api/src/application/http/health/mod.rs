use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use sift_core::domain::health::ports::HealthCheckService;
use tracing::warn;
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Readiness check",
    description = "Pings the database.",
    responses(
        (status = 200, body = HealthResponse),
        (status = 503, body = ErrorResponse, description = "Database unreachable")
    )
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    state.service.readiness().await.map_err(|e| {
        warn!("readiness check failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
    }))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(get_health))
}
