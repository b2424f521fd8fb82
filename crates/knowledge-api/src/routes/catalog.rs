//! Read-mostly catalogs: AI models and content templates.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use knowledge_types::{AIModel, AIModelUpdate, ModelId, Template};
use crate::{
    error::{ApiError, ApiResult},
    routes::{parse_id, ApiJson},
    state::AppState,
};

/// List all AI models
#[utoipa::path(
    get,
    path = "/api/models",
    responses(
        (status = 200, description = "Available AI models", body = [AIModel])
    ),
    tag = "catalog"
)]
pub async fn list_models(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AIModel>>> {
    let models = state
        .storage
        .list_models()
        .await
        .map_err(ApiError::storage("Failed to fetch models"))?;

    Ok(Json(models))
}

/// Update an AI model
///
/// Only the fields present in the body are replaced.
#[utoipa::path(
    patch,
    path = "/api/models/{id}",
    params(
        ("id" = u32, Path, description = "AI model ID")
    ),
    request_body = AIModelUpdate,
    responses(
        (status = 200, description = "Updated model", body = AIModel),
        (status = 400, description = "Invalid model ID format or body"),
        (status = 404, description = "AI Model not found")
    ),
    tag = "catalog"
)]
pub async fn update_model(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<AIModelUpdate>,
) -> ApiResult<Json<AIModel>> {
    let id: ModelId = parse_id(&id, "model")?;

    let model = state
        .storage
        .update_model(id, update)
        .await
        .map_err(ApiError::storage("Failed to update model"))?;

    tracing::info!(model_id = %model.id, is_active = model.is_active, "Model updated");

    Ok(Json(model))
}

/// List content templates
#[utoipa::path(
    get,
    path = "/api/templates",
    responses(
        (status = 200, description = "Available templates", body = [Template])
    ),
    tag = "catalog"
)]
pub async fn list_templates(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Template>>> {
    let templates = state
        .storage
        .list_templates()
        .await
        .map_err(ApiError::storage("Failed to fetch templates"))?;

    Ok(Json(templates))
}
