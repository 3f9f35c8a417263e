//! Liveness and readiness probes

use async_graphql::Request;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check - GET /health
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Readiness check - GET /health/ready. Ready once the schema answers a trivial query.
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<&'static str>>) {
    let response = state.schema.execute(Request::new("{ __typename }")).await;
    if response.is_ok() {
        return (StatusCode::OK, Json(ApiResponse::success("ready")));
    }

    warn!("Readiness probe failed: {:?}", response.errors);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiResponse::error("NOT_READY", "GraphQL schema is not answering")),
    )
}
