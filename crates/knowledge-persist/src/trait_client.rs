use async_trait::async_trait;
use serde::Serialize;

use knowledge_types::{
    AIModel, AIModelUpdate, BillingRecord, Conversation, ConversationId, ConversationMessage,
    ConversationUpdate, File, FileId, KnowledgeGraph, KnowledgeGraphId, MindMap, MindMapId,
    ModelId, NewAIModel, NewBillingRecord, NewConversation, NewFile, NewKnowledgeGraph,
    NewMindMap, NewNote, NewQuestionAnswer, NewSummary, NewUser, NewVectorDatabase, NewWorkspace,
    Note, NoteId, NoteUpdate, QuestionAnswer, Summary, SummaryId, Template, TemplateId, User,
    UserId, UserUpdate, VectorDatabase, VectorDatabaseId, Workspace, WorkspaceId,
    WorkspaceUpdate,
};

use crate::error::Result;

/// Row counts per collection, reported by the health endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub users: usize,
    pub workspaces: usize,
    pub files: usize,
    pub models: usize,
    pub templates: usize,
    pub knowledge_graphs: usize,
    pub vector_databases: usize,
    pub conversations: usize,
    pub billing_records: usize,
}

/// Storage operations for every entity type
///
/// Reads return `Ok(None)` / an empty `Vec` when nothing matches. Updates fail
/// with `PersistError::NotFound` when the id is absent and never create records.
#[async_trait]
pub trait StorageClient: Send + Sync {
    // Users
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn create_user(&self, user: NewUser) -> Result<User>;
    async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User>;

    /// Record the Stripe customer created for a user
    async fn update_stripe_customer_id(&self, id: UserId, customer_id: String) -> Result<User> {
        self.update_user(id, UserUpdate {
            stripe_customer_id: Some(customer_id),
            ..Default::default()
        }).await
    }

    /// Record both Stripe identifiers after a subscription is set up
    async fn update_user_stripe_info(
        &self,
        id: UserId,
        customer_id: String,
        subscription_id: String,
    ) -> Result<User> {
        self.update_user(id, UserUpdate {
            stripe_customer_id: Some(customer_id),
            stripe_subscription_id: Some(subscription_id),
            ..Default::default()
        }).await
    }

    // Workspaces
    async fn list_workspaces(&self) -> Result<Vec<Workspace>>;
    async fn get_workspace(&self, id: WorkspaceId) -> Result<Option<Workspace>>;
    /// Workspaces the user owns or collaborates on
    async fn list_workspaces_by_user(&self, user_id: UserId) -> Result<Vec<Workspace>>;
    async fn create_workspace(&self, workspace: NewWorkspace) -> Result<Workspace>;
    async fn update_workspace(&self, id: WorkspaceId, update: WorkspaceUpdate) -> Result<Workspace>;

    // Files
    async fn list_files(&self) -> Result<Vec<File>>;
    async fn get_file(&self, id: FileId) -> Result<Option<File>>;
    async fn list_files_by_workspace(&self, workspace_id: WorkspaceId) -> Result<Vec<File>>;
    async fn create_file(&self, file: NewFile) -> Result<File>;

    // AI models
    async fn list_models(&self) -> Result<Vec<AIModel>>;
    async fn get_model(&self, id: ModelId) -> Result<Option<AIModel>>;
    async fn create_model(&self, model: NewAIModel) -> Result<AIModel>;
    async fn update_model(&self, id: ModelId, update: AIModelUpdate) -> Result<AIModel>;

    // Templates (read-only catalog)
    async fn list_templates(&self) -> Result<Vec<Template>>;
    async fn get_template(&self, id: TemplateId) -> Result<Option<Template>>;

    // Summaries
    async fn create_summary(&self, summary: NewSummary) -> Result<Summary>;
    async fn get_summary(&self, id: SummaryId) -> Result<Option<Summary>>;
    async fn list_summaries_by_file(&self, file_id: FileId) -> Result<Vec<Summary>>;

    // Mind maps
    async fn create_mind_map(&self, mind_map: NewMindMap) -> Result<MindMap>;
    async fn get_mind_map(&self, id: MindMapId) -> Result<Option<MindMap>>;
    async fn list_mind_maps_by_file(&self, file_id: FileId) -> Result<Vec<MindMap>>;

    // Question answers
    async fn create_question_answer(&self, qa: NewQuestionAnswer) -> Result<QuestionAnswer>;
    async fn list_question_answers_by_workspace(
        &self,
        workspace_id: WorkspaceId,
    ) -> Result<Vec<QuestionAnswer>>;

    // Notes
    async fn create_note(&self, note: NewNote) -> Result<Note>;
    async fn get_note(&self, id: NoteId) -> Result<Option<Note>>;
    async fn list_notes_by_workspace(&self, workspace_id: WorkspaceId) -> Result<Vec<Note>>;
    async fn update_note(&self, id: NoteId, update: NoteUpdate) -> Result<Note>;

    // Knowledge graphs
    async fn list_knowledge_graphs_by_user(&self, user_id: UserId) -> Result<Vec<KnowledgeGraph>>;
    async fn get_knowledge_graph(&self, id: KnowledgeGraphId) -> Result<Option<KnowledgeGraph>>;
    async fn create_knowledge_graph(&self, graph: NewKnowledgeGraph) -> Result<KnowledgeGraph>;

    // Vector databases
    async fn list_vector_databases_by_user(&self, user_id: UserId) -> Result<Vec<VectorDatabase>>;
    async fn get_vector_database(&self, id: VectorDatabaseId) -> Result<Option<VectorDatabase>>;
    async fn create_vector_database(&self, db: NewVectorDatabase) -> Result<VectorDatabase>;

    // Conversations
    async fn list_conversations_by_user(&self, user_id: UserId) -> Result<Vec<Conversation>>;
    async fn get_conversation(&self, id: ConversationId) -> Result<Option<Conversation>>;
    async fn create_conversation(&self, conversation: NewConversation) -> Result<Conversation>;
    async fn update_conversation(
        &self,
        id: ConversationId,
        update: ConversationUpdate,
    ) -> Result<Conversation>;
    /// Append one message under a single write, so concurrent appends are not lost
    async fn append_message(
        &self,
        id: ConversationId,
        message: ConversationMessage,
    ) -> Result<Conversation>;

    // Billing (append-only)
    async fn list_billing_records_by_user(&self, user_id: UserId) -> Result<Vec<BillingRecord>>;
    async fn create_billing_record(&self, record: NewBillingRecord) -> Result<BillingRecord>;

    async fn counts(&self) -> Result<EntityCounts>;
}
