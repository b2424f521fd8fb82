//! Intake endpoints. Both answer immediately with a synthetic identifier;
//! nothing is downloaded, stored or queued.

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{error::{ApiError, ApiResult}, routes::is_present};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AnalyzeYoutubeRequest {
    #[schema(value_type = Option<String>)]
    pub url: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub options: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisJobResponse {
    pub success: bool,
    pub message: String,
    pub job_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUploadResponse {
    pub success: bool,
    pub message: String,
    pub document_id: String,
}

/// Start analysing a YouTube video
///
/// Returns a `youtube-analysis-<millis>` job id. The job is not tracked.
#[utoipa::path(
    post,
    path = "/api/analyze/youtube",
    request_body = AnalyzeYoutubeRequest,
    responses(
        (status = 200, description = "Analysis started", body = AnalysisJobResponse),
        (status = 400, description = "YouTube URL is required")
    ),
    tag = "analysis"
)]
pub async fn analyze_youtube(
    body: Option<Json<AnalyzeYoutubeRequest>>,
) -> ApiResult<Json<AnalysisJobResponse>> {
    let Json(req) = body.unwrap_or_default();

    if !is_present(req.url.as_ref()) {
        return Err(ApiError::bad_request("YouTube URL is required"));
    }

    let job_id = format!("youtube-analysis-{}", Utc::now().timestamp_millis());
    tracing::info!(job_id = %job_id, "YouTube analysis requested");

    Ok(Json(AnalysisJobResponse {
        success: true,
        message: "Analysis started".to_string(),
        job_id,
    }))
}

/// Accept a document upload
///
/// The payload is ignored and no bytes are kept.
#[utoipa::path(
    post,
    path = "/api/documents/upload",
    responses(
        (status = 200, description = "Upload initiated", body = DocumentUploadResponse)
    ),
    tag = "analysis"
)]
pub async fn upload_document() -> Json<DocumentUploadResponse> {
    let document_id = format!("doc-{}", Utc::now().timestamp_millis());
    tracing::info!(document_id = %document_id, "Document upload requested");

    Json(DocumentUploadResponse {
        success: true,
        message: "Document upload initiated".to_string(),
        document_id,
    })
}
