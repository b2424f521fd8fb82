use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use knowledge_types::{BillingRecord, Conversation, KnowledgeGraph, User, UserId, VectorDatabase, Workspace};
use crate::{error::{ApiError, ApiResult}, routes::parse_id, state::AppState};

/// Get a user profile
///
/// The stored password is never serialized.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 400, description = "Invalid user ID format"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let id: UserId = parse_id(&id, "user")?;

    let user = state
        .storage
        .get_user(id)
        .await
        .map_err(ApiError::storage("Failed to fetch user"))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user))
}

/// Workspaces a user owns or collaborates on
#[utoipa::path(
    get,
    path = "/api/users/{id}/workspaces",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Owned and shared workspaces", body = [Workspace]),
        (status = 400, description = "Invalid user ID format")
    ),
    tag = "users"
)]
pub async fn list_user_workspaces(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Workspace>>> {
    let id: UserId = parse_id(&id, "user")?;

    let workspaces = state
        .storage
        .list_workspaces_by_user(id)
        .await
        .map_err(ApiError::storage("Failed to fetch workspaces"))?;

    Ok(Json(workspaces))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/conversations",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Conversations of the user", body = [Conversation])
    ),
    tag = "users"
)]
pub async fn list_user_conversations(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Conversation>>> {
    let id: UserId = parse_id(&id, "user")?;

    let conversations = state
        .storage
        .list_conversations_by_user(id)
        .await
        .map_err(ApiError::storage("Failed to fetch conversations"))?;

    Ok(Json(conversations))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/knowledge-graphs",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Knowledge graphs of the user", body = [KnowledgeGraph])
    ),
    tag = "users"
)]
pub async fn list_user_knowledge_graphs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<KnowledgeGraph>>> {
    let id: UserId = parse_id(&id, "user")?;

    let graphs = state
        .storage
        .list_knowledge_graphs_by_user(id)
        .await
        .map_err(ApiError::storage("Failed to fetch knowledge graphs"))?;

    Ok(Json(graphs))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/vector-databases",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Vector databases of the user", body = [VectorDatabase])
    ),
    tag = "users"
)]
pub async fn list_user_vector_databases(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<VectorDatabase>>> {
    let id: UserId = parse_id(&id, "user")?;

    let databases = state
        .storage
        .list_vector_databases_by_user(id)
        .await
        .map_err(ApiError::storage("Failed to fetch vector databases"))?;

    Ok(Json(databases))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/billing",
    params(
        ("id" = u32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Billing history of the user", body = [BillingRecord])
    ),
    tag = "users"
)]
pub async fn list_user_billing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<BillingRecord>>> {
    let id: UserId = parse_id(&id, "user")?;

    let records = state
        .storage
        .list_billing_records_by_user(id)
        .await
        .map_err(ApiError::storage("Failed to fetch billing records"))?;

    Ok(Json(records))
}
