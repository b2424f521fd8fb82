use axum::Json;
use utoipa::OpenApi;

use knowledge_types::{
    AIModel, AIModelUpdate, BillingRecord, BillingRecordId, BillingStatus, Conversation,
    ConversationId, ConversationMessage, File, FileId, FileType, GraphEdge, GraphNode,
    KnowledgeGraph, KnowledgeGraphId, MessageRole, ModelId, NodePosition, Plan, Template,
    TemplateId, User, UserId, UserRole, VectorDatabase, VectorDatabaseId, Workspace, WorkspaceId,
};
use crate::routes::{ai, analysis, catalog, conversations, health, users, workspaces};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "KnowledgeAI API",
        description = "Workspaces, files and AI-assisted analysis for the KnowledgeAI dashboard"
    ),
    paths(
        health::health_check,
        workspaces::list_workspaces,
        workspaces::get_workspace,
        workspaces::list_workspace_files,
        analysis::analyze_youtube,
        analysis::upload_document,
        ai::summarize,
        ai::mindmap,
        ai::answer_question,
        users::get_user,
        users::list_user_workspaces,
        users::list_user_conversations,
        users::list_user_knowledge_graphs,
        users::list_user_vector_databases,
        users::list_user_billing,
        catalog::list_models,
        catalog::update_model,
        catalog::list_templates,
        conversations::get_conversation,
        conversations::append_message,
    ),
    components(
        schemas(
            UserId, WorkspaceId, FileId, ModelId, TemplateId, KnowledgeGraphId,
            VectorDatabaseId, ConversationId, BillingRecordId,
            User, UserRole, Plan,
            Workspace, File, FileType,
            AIModel, AIModelUpdate, Template,
            KnowledgeGraph, GraphNode, GraphEdge, NodePosition,
            VectorDatabase,
            Conversation, ConversationMessage, MessageRole,
            BillingRecord, BillingStatus,
            health::HealthResponse,
            analysis::AnalyzeYoutubeRequest,
            analysis::AnalysisJobResponse,
            analysis::DocumentUploadResponse,
            ai::SummarizeRequest,
            ai::SummaryResponse,
            ai::MindMapRequest,
            ai::MindMapBody,
            ai::MindMapResponse,
            ai::QuestionRequest,
            ai::AnswerResponse,
            conversations::AppendMessageRequest,
        )
    ),
    tags(
        (name = "health", description = "Service status"),
        (name = "workspaces", description = "Workspaces and their files"),
        (name = "analysis", description = "YouTube analysis and document intake"),
        (name = "ai", description = "Summaries, mind maps and question answering"),
        (name = "users", description = "User profiles and owned resources"),
        (name = "catalog", description = "AI models and templates"),
        (name = "conversations", description = "Chat transcripts")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
