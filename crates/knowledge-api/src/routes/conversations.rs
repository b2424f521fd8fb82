use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use knowledge_types::{Conversation, ConversationId, ConversationMessage, MessageRole};
use crate::{
    error::{ApiError, ApiResult},
    routes::{parse_id, ApiJson},
    state::AppState,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AppendMessageRequest {
    /// Defaults to `user`
    pub role: Option<MessageRole>,
    pub content: String,
}

/// Get a conversation with its full transcript
#[utoipa::path(
    get,
    path = "/api/conversations/{id}",
    params(
        ("id" = u32, Path, description = "Conversation ID")
    ),
    responses(
        (status = 200, description = "Conversation", body = Conversation),
        (status = 400, description = "Invalid conversation ID format"),
        (status = 404, description = "Conversation not found")
    ),
    tag = "conversations"
)]
pub async fn get_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Conversation>> {
    let id: ConversationId = parse_id(&id, "conversation")?;

    let conversation = state
        .storage
        .get_conversation(id)
        .await
        .map_err(ApiError::storage("Failed to fetch conversation"))?
        .ok_or_else(|| ApiError::not_found("Conversation not found"))?;

    Ok(Json(conversation))
}

/// Append a message to a conversation
#[utoipa::path(
    post,
    path = "/api/conversations/{id}/messages",
    params(
        ("id" = u32, Path, description = "Conversation ID")
    ),
    request_body = AppendMessageRequest,
    responses(
        (status = 200, description = "Conversation after the append", body = Conversation),
        (status = 400, description = "Malformed body or message content is required"),
        (status = 404, description = "Conversation not found")
    ),
    tag = "conversations"
)]
pub async fn append_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AppendMessageRequest>,
) -> ApiResult<Json<Conversation>> {
    let id: ConversationId = parse_id(&id, "conversation")?;

    if req.content.trim().is_empty() {
        return Err(ApiError::bad_request("Message content is required"));
    }

    let message = ConversationMessage::new(
        req.role.unwrap_or(MessageRole::User),
        req.content,
        Utc::now(),
    );

    let conversation = state
        .storage
        .append_message(id, message)
        .await
        .map_err(ApiError::storage("Failed to append message"))?;

    tracing::debug!(
        conversation_id = %conversation.id,
        messages = conversation.messages.len(),
        "Message appended"
    );

    Ok(Json(conversation))
}
