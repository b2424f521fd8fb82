use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use knowledge_persist::EntityCounts;
use crate::{error::{ApiError, ApiResult}, state::AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[schema(value_type = Object)]
    pub counts: EntityCounts,
}

/// Health check endpoint
///
/// Reports the service version and how many records each collection holds
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HealthResponse>> {
    let counts = state
        .storage
        .counts()
        .await
        .map_err(ApiError::storage("Storage unavailable"))?;
    
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        counts,
    }))
}
