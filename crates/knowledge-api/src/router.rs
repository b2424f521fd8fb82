use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    middleware::logging,
    openapi,
    routes::{ai, analysis, catalog, conversations, health, users, workspaces},
    state::AppState,
};

/// Build the full application router, every route under `/api`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health & docs
        .route("/health", get(health::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        // Workspaces
        .route("/workspaces", get(workspaces::list_workspaces))
        .route("/workspaces/:id", get(workspaces::get_workspace))
        .route("/workspaces/:id/files", get(workspaces::list_workspace_files))
        // Intake
        .route("/analyze/youtube", post(analysis::analyze_youtube))
        .route("/documents/upload", post(analysis::upload_document))
        // AI
        .route("/ai/summarize", post(ai::summarize))
        .route("/ai/mindmap", post(ai::mindmap))
        .route("/ai/qa", post(ai::answer_question))
        // Users
        .route("/users/:id", get(users::get_user))
        .route("/users/:id/workspaces", get(users::list_user_workspaces))
        .route("/users/:id/conversations", get(users::list_user_conversations))
        .route("/users/:id/knowledge-graphs", get(users::list_user_knowledge_graphs))
        .route("/users/:id/vector-databases", get(users::list_user_vector_databases))
        .route("/users/:id/billing", get(users::list_user_billing))
        // Catalog
        .route("/models", get(catalog::list_models))
        .route("/models/:id", patch(catalog::update_model))
        .route("/templates", get(catalog::list_templates))
        // Conversations
        .route("/conversations/:id", get(conversations::get_conversation))
        .route("/conversations/:id/messages", post(conversations::append_message));

    Router::new()
        .nest("/api", api_routes)
        .layer(middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(state.config.server.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if !config.cors.enabled {
        return CorsLayer::permissive();
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers(Any);

    if config.cors.origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors
        .origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}
