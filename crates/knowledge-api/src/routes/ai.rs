//! Placeholder AI endpoints.
//!
//! They validate the required fields and then return the same fixed content for
//! every request. No model is called and nothing is persisted.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use knowledge_types::{GraphEdge, GraphNode};
use crate::{error::{ApiError, ApiResult}, routes::is_present};

pub const PLACEHOLDER_SUMMARY: &str = "This is a placeholder summary for the document.";
pub const PLACEHOLDER_ANSWER: &str = "This is a placeholder answer to your question.";
pub const PLACEHOLDER_MINDMAP_TITLE: &str = "Document Mind Map";

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarizeRequest {
    #[schema(value_type = Option<String>)]
    pub document_id: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub length: Option<Value>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MindMapRequest {
    #[schema(value_type = Option<String>)]
    pub document_id: Option<Value>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionRequest {
    #[schema(value_type = Option<String>)]
    pub document_id: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub question: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MindMapBody {
    pub title: String,
    pub nodes: Vec<GraphNode>,
    pub connections: Vec<GraphEdge>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MindMapResponse {
    pub success: bool,
    pub mindmap: MindMapBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnswerResponse {
    pub success: bool,
    pub answer: String,
    pub sources: Vec<String>,
}

/// Summarize a document
#[utoipa::path(
    post,
    path = "/api/ai/summarize",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Placeholder summary", body = SummaryResponse),
        (status = 400, description = "Document ID is required")
    ),
    tag = "ai"
)]
pub async fn summarize(
    body: Option<Json<SummarizeRequest>>,
) -> ApiResult<Json<SummaryResponse>> {
    let Json(req) = body.unwrap_or_default();

    if !is_present(req.document_id.as_ref()) {
        return Err(ApiError::bad_request("Document ID is required"));
    }

    Ok(Json(SummaryResponse {
        success: true,
        summary: PLACEHOLDER_SUMMARY.to_string(),
    }))
}

/// Generate a mind map for a document
#[utoipa::path(
    post,
    path = "/api/ai/mindmap",
    request_body = MindMapRequest,
    responses(
        (status = 200, description = "Placeholder mind map", body = MindMapResponse),
        (status = 400, description = "Document ID is required")
    ),
    tag = "ai"
)]
pub async fn mindmap(
    body: Option<Json<MindMapRequest>>,
) -> ApiResult<Json<MindMapResponse>> {
    let Json(req) = body.unwrap_or_default();

    if !is_present(req.document_id.as_ref()) {
        return Err(ApiError::bad_request("Document ID is required"));
    }

    Ok(Json(MindMapResponse {
        success: true,
        mindmap: MindMapBody {
            title: PLACEHOLDER_MINDMAP_TITLE.to_string(),
            nodes: Vec::new(),
            connections: Vec::new(),
        },
    }))
}

/// Answer a question about a document
#[utoipa::path(
    post,
    path = "/api/ai/qa",
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Placeholder answer", body = AnswerResponse),
        (status = 400, description = "Document ID and question are required")
    ),
    tag = "ai"
)]
pub async fn answer_question(
    body: Option<Json<QuestionRequest>>,
) -> ApiResult<Json<AnswerResponse>> {
    let Json(req) = body.unwrap_or_default();

    if !is_present(req.document_id.as_ref()) || !is_present(req.question.as_ref()) {
        return Err(ApiError::bad_request("Document ID and question are required"));
    }

    Ok(Json(AnswerResponse {
        success: true,
        answer: PLACEHOLDER_ANSWER.to_string(),
        sources: Vec::new(),
    }))
}
