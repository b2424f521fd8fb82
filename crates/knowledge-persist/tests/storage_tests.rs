use std::sync::Arc;

use chrono::Utc;
use knowledge_persist::{seed::ids, InMemoryStorage, PersistError, StorageBuilder, StorageClient};
use knowledge_types::{
    AIModelUpdate, BillingStatus, ConversationId, ConversationMessage, ConversationUpdate,
    FileType, ModelId, NewBillingRecord, NewConversation, NewFile, NewNote, NewWorkspace,
    NoteUpdate, UserId, WorkspaceId, WorkspaceUpdate,
};

fn seeded() -> InMemoryStorage {
    StorageBuilder::new().build().unwrap()
}

#[tokio::test]
async fn test_ids_strictly_increase_per_entity() {
    let storage = StorageBuilder::new().seed(false).build().unwrap();

    let mut workspace_ids = Vec::new();
    for n in 0..5 {
        let ws = storage
            .create_workspace(NewWorkspace::new(format!("ws-{n}"), UserId(1)))
            .await
            .unwrap();
        workspace_ids.push(ws.id.get());
    }
    assert_eq!(workspace_ids, vec![1, 2, 3, 4, 5]);

    // Each entity type has its own counter
    let file = storage
        .create_file(NewFile::new("a.pdf", FileType::Pdf, WorkspaceId(5)))
        .await
        .unwrap();
    assert_eq!(file.id.get(), 1);
}

#[tokio::test]
async fn test_seed_has_three_workspaces_and_three_files_in_first() {
    let storage = seeded();

    let workspaces = storage.list_workspaces().await.unwrap();
    assert_eq!(workspaces.len(), 3);
    assert_eq!(workspaces[0].name, "AI Ethics Research");

    let files = storage
        .list_files_by_workspace(ids::AI_ETHICS_WORKSPACE)
        .await
        .unwrap();
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f.workspace_id == WorkspaceId(1)));
    assert_eq!(files.iter().filter(|f| f.is_active).count(), 1);

    assert!(storage.list_files_by_workspace(WorkspaceId(2)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seed_catalogs() {
    let storage = seeded();

    let models = storage.list_models().await.unwrap();
    assert_eq!(models.len(), 5);
    assert_eq!(models.iter().filter(|m| m.is_active).count(), 1);
    assert_eq!(models[0].name, "GPT-4o");

    assert_eq!(storage.list_templates().await.unwrap().len(), 4);

    let graphs = storage.list_knowledge_graphs_by_user(ids::SARAH).await.unwrap();
    assert_eq!(graphs.len(), 1);
    assert_eq!(graphs[0].nodes.len(), 5);
    assert_eq!(graphs[0].edges.len(), 5);

    let conversation = storage.get_conversation(ConversationId(1)).await.unwrap().unwrap();
    assert_eq!(conversation.messages.len(), 4);

    let billing = storage.list_billing_records_by_user(ids::SARAH).await.unwrap();
    assert_eq!(billing.len(), 2);
    assert!(storage.list_billing_records_by_user(ids::MICHAEL).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_workspaces_by_user_includes_collaborations() {
    let storage = seeded();

    let michael: Vec<u32> = storage
        .list_workspaces_by_user(ids::MICHAEL)
        .await
        .unwrap()
        .iter()
        .map(|w| w.id.get())
        .collect();
    assert_eq!(michael, vec![1, 3]);

    let sarah = storage.list_workspaces_by_user(ids::SARAH).await.unwrap();
    assert_eq!(sarah.len(), 3);

    assert!(storage.list_workspaces_by_user(UserId(99)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_lookup_by_username() {
    let storage = seeded();

    let sarah = storage.get_user_by_username("sarahchen").await.unwrap().unwrap();
    assert_eq!(sarah.id, ids::SARAH);
    assert!(storage.get_user_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_stripe_helpers_update_user() {
    let storage = seeded();

    let user = storage
        .update_stripe_customer_id(ids::MICHAEL, "cus_123".to_string())
        .await
        .unwrap();
    assert_eq!(user.stripe_customer_id.as_deref(), Some("cus_123"));
    assert!(user.stripe_subscription_id.is_none());

    let user = storage
        .update_user_stripe_info(ids::MICHAEL, "cus_456".to_string(), "sub_789".to_string())
        .await
        .unwrap();
    assert_eq!(user.stripe_customer_id.as_deref(), Some("cus_456"));
    assert_eq!(user.stripe_subscription_id.as_deref(), Some("sub_789"));

    let err = storage
        .update_stripe_customer_id(UserId(404), "cus_x".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "User with id 404 not found");
}

#[tokio::test]
async fn test_update_model_toggles_active() {
    let storage = seeded();

    let model = storage
        .update_model(ModelId(2), AIModelUpdate {
            is_active: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(model.is_active);
    assert_eq!(model.name, "Gemini Pro");

    let err = storage
        .update_model(ModelId(77), AIModelUpdate::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_conversation_not_found() {
    let storage = seeded();

    let err = storage
        .update_conversation(ConversationId(9999), ConversationUpdate {
            title: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PersistError::NotFound { entity: "Conversation", id: 9999 }));
    assert_eq!(err.to_string(), "Conversation with id 9999 not found");
}

#[tokio::test]
async fn test_update_conversation_refreshes_updated_at() {
    let storage = seeded();
    let before = storage.get_conversation(ConversationId(1)).await.unwrap().unwrap();

    let after = storage
        .update_conversation(ConversationId(1), ConversationUpdate {
            title: Some("Ethics, continued".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(after.title, "Ethics, continued");
    assert_eq!(after.messages.len(), before.messages.len());
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);
}

#[tokio::test]
async fn test_concurrent_appends_are_all_kept() {
    let storage = Arc::new(StorageBuilder::new().seed(false).build().unwrap());
    let conversation = storage
        .create_conversation(NewConversation::new("Chat", ModelId(1), UserId(1)))
        .await
        .unwrap();

    let tasks = (0..20).map(|n| {
        let storage = storage.clone();
        let id = conversation.id;
        tokio::spawn(async move {
            storage
                .append_message(id, ConversationMessage::user(format!("msg {n}"), Utc::now()))
                .await
        })
    });
    for result in futures::future::join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let stored = storage.get_conversation(conversation.id).await.unwrap().unwrap();
    assert_eq!(stored.messages.len(), 20);
}

#[tokio::test]
async fn test_workspace_update_stamps_last_modified() {
    let storage = seeded();
    let before = storage.get_workspace(WorkspaceId(3)).await.unwrap().unwrap();

    let after = storage
        .update_workspace(WorkspaceId(3), WorkspaceUpdate {
            views: Some(before.views + 1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(after.views, 37);
    assert!(after.last_modified > before.last_modified);

    assert!(storage
        .update_workspace(WorkspaceId(10), WorkspaceUpdate::default())
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_notes_lifecycle() {
    let storage = seeded();
    let note = storage
        .create_note(NewNote::new("Reading list", "Fairness papers", WorkspaceId(1), ids::SARAH))
        .await
        .unwrap();

    let updated = storage
        .update_note(note.id, NoteUpdate {
            title: Some("Reading list (v2)".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.content, "Fairness papers");
    assert_eq!(storage.list_notes_by_workspace(WorkspaceId(1)).await.unwrap().len(), 1);
    assert!(storage.list_notes_by_workspace(WorkspaceId(2)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_billing_is_append_only_and_sequential() {
    let storage = seeded();
    let record = storage
        .create_billing_record(
            NewBillingRecord::new(ids::MICHAEL, 9.0, "Basic Plan", BillingStatus::Pending),
        )
        .await
        .unwrap();

    assert_eq!(record.id.get(), 3);
    assert!(record.invoice_id.is_none());
    assert_eq!(storage.counts().await.unwrap().billing_records, 3);
}

#[tokio::test]
async fn test_reads_on_unknown_ids_are_absent() {
    let storage = seeded();

    assert!(storage.get_workspace(WorkspaceId(999)).await.unwrap().is_none());
    assert!(storage.get_user(UserId(999)).await.unwrap().is_none());
    assert!(storage.get_model(ModelId(999)).await.unwrap().is_none());
    assert!(storage.list_conversations_by_user(UserId(999)).await.unwrap().is_empty());
    assert!(storage.list_vector_databases_by_user(UserId(999)).await.unwrap().is_empty());
}
