//! HTTP-level tests for every route group.
//!
//! Each test builds the full router over a freshly seeded in-memory store and
//! drives it in-process with `oneshot`.
//!
//! Run with: `cargo test -p knowledge-api --test api_tests`

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use knowledge_api::{build_router, config::Config, state::AppState};
use knowledge_persist::StorageBuilder;

// ── harness ──

fn app() -> Router {
    let storage = StorageBuilder::new().build().expect("seed storage");
    let state = Arc::new(AppState::new(Config::default(), Arc::new(storage)));
    build_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn send_json(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    send_json(Method::POST, uri, body)
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn call(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// ── health & docs ──

#[tokio::test]
async fn test_health_reports_seeded_counts() {
    let (status, body) = call(app(), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["counts"]["workspaces"], 3);
    assert_eq!(body["counts"]["models"], 5);
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (status, body) = call(app(), get("/api/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/workspaces/{id}"].is_object());
    assert!(body["paths"]["/api/ai/qa"].is_object());
}

// ── workspaces ──

#[tokio::test]
async fn test_list_workspaces() {
    let (status, body) = call(app(), get("/api/workspaces")).await;

    assert_eq!(status, StatusCode::OK);
    let workspaces = body.as_array().unwrap();
    assert_eq!(workspaces.len(), 3);
    assert_eq!(workspaces[0]["id"], 1);
    assert!(workspaces[0]["lastModified"].is_string());
}

#[tokio::test]
async fn test_get_workspace() {
    let (status, body) = call(app(), get("/api/workspaces/2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["isPrivate"], true);
}

#[tokio::test]
async fn test_get_unknown_workspace_is_404() {
    let (status, body) = call(app(), get("/api/workspaces/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Workspace not found");
}

#[tokio::test]
async fn test_non_numeric_workspace_id_is_400() {
    let (status, body) = call(app(), get("/api/workspaces/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid workspace ID format");
}

#[tokio::test]
async fn test_workspace_files() {
    let (status, body) = call(app(), get("/api/workspaces/1/files")).await;

    assert_eq!(status, StatusCode::OK);
    let files = body.as_array().unwrap();
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f["workspaceId"] == 1));
    assert!(files.iter().all(|f| f["type"].is_string()));
}

#[tokio::test]
async fn test_files_of_unknown_workspace_is_empty() {
    let (status, body) = call(app(), get("/api/workspaces/42/files")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// ── intake ──

#[tokio::test]
async fn test_analyze_youtube_requires_url() {
    let (status, body) = call(app(), post_empty("/api/analyze/youtube")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "YouTube URL is required");

    let (status, _) = call(app(), post_json("/api/analyze/youtube", json!({"url": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_youtube_starts_job() {
    let (status, body) = call(
        app(),
        post_json("/api/analyze/youtube", json!({"url": "https://x", "options": {}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Analysis started");
    assert!(body["jobId"].as_str().unwrap().starts_with("youtube-analysis-"));
}

#[tokio::test]
async fn test_upload_document_ignores_payload() {
    let (status, body) = call(app(), post_empty("/api/documents/upload")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Document upload initiated");
    assert!(body["documentId"].as_str().unwrap().starts_with("doc-"));
}

// ── ai ──

#[tokio::test]
async fn test_summarize_requires_document_id() {
    let (status, body) = call(app(), post_json("/api/ai/summarize", json!({"length": "brief"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Document ID is required");
}

#[tokio::test]
async fn test_summary_is_identical_across_documents() {
    let (status, first) = call(app(), post_json("/api/ai/summarize", json!({"documentId": "1"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, second) = call(app(), post_json("/api/ai/summarize", json!({"documentId": 77}))).await;

    assert_eq!(first["success"], true);
    assert_eq!(first["summary"], second["summary"]);
}

#[tokio::test]
async fn test_mindmap() {
    let (status, _) = call(app(), post_empty("/api/ai/mindmap")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(app(), post_json("/api/ai/mindmap", json!({"documentId": "3"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mindmap"]["title"], "Document Mind Map");
    assert_eq!(body["mindmap"]["nodes"], json!([]));
    assert_eq!(body["mindmap"]["connections"], json!([]));
}

#[tokio::test]
async fn test_qa_requires_document_and_question() {
    let (status, body) = call(app(), post_json("/api/ai/qa", json!({"documentId": "1"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Document ID and question are required");

    let (status, body) = call(
        app(),
        post_json("/api/ai/qa", json!({"documentId": "1", "question": "Why?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sources"], json!([]));
    assert!(body["answer"].is_string());
}

// ── users ──

#[tokio::test]
async fn test_get_user_hides_password() {
    let (status, body) = call(app(), get("/api/users/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "sarahchen");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let (status, body) = call(app(), get("/api/users/99")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_user_workspaces_include_shared() {
    let (status, body) = call(app(), get("/api/users/2/workspaces")).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_user_owned_collections() {
    let (_, conversations) = call(app(), get("/api/users/1/conversations")).await;
    assert_eq!(conversations.as_array().unwrap().len(), 1);

    let (_, graphs) = call(app(), get("/api/users/1/knowledge-graphs")).await;
    assert_eq!(graphs[0]["nodes"].as_array().unwrap().len(), 5);

    let (_, databases) = call(app(), get("/api/users/1/vector-databases")).await;
    assert_eq!(databases.as_array().unwrap().len(), 2);

    let (_, billing) = call(app(), get("/api/users/1/billing")).await;
    assert_eq!(billing.as_array().unwrap().len(), 2);
}

// ── catalog ──

#[tokio::test]
async fn test_list_models_and_templates() {
    let (_, models) = call(app(), get("/api/models")).await;
    let models = models.as_array().unwrap();
    assert_eq!(models.len(), 5);
    assert_eq!(models.iter().filter(|m| m["isActive"] == true).count(), 1);

    let (_, templates) = call(app(), get("/api/templates")).await;
    assert_eq!(templates.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_patch_model() {
    let (status, body) = call(
        app(),
        send_json(Method::PATCH, "/api/models/2", json!({"isActive": true})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["isActive"], true);
}

#[tokio::test]
async fn test_patch_unknown_model_is_404() {
    let (status, body) = call(
        app(),
        send_json(Method::PATCH, "/api/models/99", json!({"name": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "AI Model not found");
}

#[tokio::test]
async fn test_patch_model_rejects_malformed_body() {
    let req = Request::builder()
        .method(Method::PATCH)
        .uri("/api/models/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = call(app(), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// ── conversations ──

#[tokio::test]
async fn test_get_conversation() {
    let (status, body) = call(app(), get("/api/conversations/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["messages"].as_array().unwrap().len(), 4);

    let (status, body) = call(app(), get("/api/conversations/9")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Conversation not found");
}

#[tokio::test]
async fn test_append_message() {
    let app = app();

    let (status, body) = call(
        app.clone(),
        post_json("/api/conversations/1/messages", json!({"content": "And privacy?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[4]["role"], "user");
    assert_eq!(messages[4]["content"], "And privacy?");

    // The append is visible to later reads on the same store
    let (_, body) = call(app, get("/api/conversations/1")).await;
    assert_eq!(body["messages"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_append_message_validation() {
    let (status, body) = call(
        app(),
        post_json("/api/conversations/1/messages", json!({"role": "assistant", "content": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message content is required");

    let (status, body) = call(
        app(),
        post_json("/api/conversations/9999/messages", json!({"content": "hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Conversation not found");
}

#[tokio::test]
async fn test_append_message_reports_malformed_body() {
    let app = app();

    let (status, body) = call(
        app.clone(),
        post_json("/api/conversations/1/messages", json!({"role": "system", "content": "hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(!error.contains("content is required"), "got: {error}");

    let (status, body) = call(
        app.clone(),
        post_json("/api/conversations/1/messages", json!({"content": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["error"].as_str().unwrap().contains("content is required"));

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/conversations/1/messages")
        .body(Body::from(r#"{"content":"hi"}"#))
        .unwrap();
    let (status, body) = call(app.clone(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["error"].as_str().unwrap().contains("content is required"));

    // Rejected bodies leave the transcript untouched
    let (_, body) = call(app, get("/api/conversations/1")).await;
    assert_eq!(body["messages"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_signed_or_padded_ids_are_400() {
    for uri in ["/api/workspaces/+1", "/api/workspaces/%201", "/api/users/+2"] {
        let (status, body) = call(app(), get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].as_str().unwrap().starts_with("Invalid"), "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let resp = app().oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
