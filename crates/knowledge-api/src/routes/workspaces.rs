use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use knowledge_types::{File, Workspace, WorkspaceId};
use crate::{error::{ApiError, ApiResult}, routes::parse_id, state::AppState};

/// List all workspaces
#[utoipa::path(
    get,
    path = "/api/workspaces",
    responses(
        (status = 200, description = "All workspaces", body = [Workspace]),
        (status = 500, description = "Failed to fetch workspaces")
    ),
    tag = "workspaces"
)]
pub async fn list_workspaces(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Workspace>>> {
    let workspaces = state
        .storage
        .list_workspaces()
        .await
        .map_err(ApiError::storage("Failed to fetch workspaces"))?;

    Ok(Json(workspaces))
}

/// Get a specific workspace by ID
#[utoipa::path(
    get,
    path = "/api/workspaces/{id}",
    params(
        ("id" = u32, Path, description = "Workspace ID")
    ),
    responses(
        (status = 200, description = "Workspace details", body = Workspace),
        (status = 400, description = "Invalid workspace ID format"),
        (status = 404, description = "Workspace not found")
    ),
    tag = "workspaces"
)]
pub async fn get_workspace(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Workspace>> {
    let id: WorkspaceId = parse_id(&id, "workspace")?;

    let workspace = state
        .storage
        .get_workspace(id)
        .await
        .map_err(ApiError::storage("Failed to fetch workspace"))?
        .ok_or_else(|| ApiError::not_found("Workspace not found"))?;

    Ok(Json(workspace))
}

/// List the files of a workspace
///
/// An unknown workspace yields an empty list rather than 404.
#[utoipa::path(
    get,
    path = "/api/workspaces/{id}/files",
    params(
        ("id" = u32, Path, description = "Workspace ID")
    ),
    responses(
        (status = 200, description = "Files in the workspace", body = [File]),
        (status = 400, description = "Invalid workspace ID format"),
        (status = 500, description = "Failed to fetch files")
    ),
    tag = "workspaces"
)]
pub async fn list_workspace_files(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<File>>> {
    let id: WorkspaceId = parse_id(&id, "workspace")?;

    let files = state
        .storage
        .list_files_by_workspace(id)
        .await
        .map_err(ApiError::storage("Failed to fetch files"))?;

    Ok(Json(files))
}
