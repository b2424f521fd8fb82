mod table;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use knowledge_types::{
    AIModel, AIModelUpdate, BillingRecord, BillingRecordId, Conversation, ConversationId,
    ConversationMessage, ConversationUpdate, File, FileId, KnowledgeGraph, KnowledgeGraphId,
    MindMap, MindMapId, ModelId, NewAIModel, NewBillingRecord, NewConversation, NewFile,
    NewKnowledgeGraph, NewMindMap, NewNote, NewQuestionAnswer, NewSummary, NewTemplate, NewUser,
    NewVectorDatabase, NewWorkspace, Note, NoteId, NoteUpdate, QuestionAnswer, QuestionAnswerId,
    Summary, SummaryId, Template, TemplateId, User, UserId, UserUpdate, VectorDatabase,
    VectorDatabaseId, Workspace, WorkspaceId, WorkspaceUpdate,
};

use crate::error::{PersistError, Result};
use crate::trait_client::{EntityCounts, StorageClient};
use table::Table;

/// All entity maps. Guarded as a unit by `InMemoryStorage`.
pub(crate) struct Tables {
    pub users: Table<UserId, User>,
    pub workspaces: Table<WorkspaceId, Workspace>,
    pub files: Table<FileId, File>,
    pub models: Table<ModelId, AIModel>,
    pub templates: Table<TemplateId, Template>,
    pub summaries: Table<SummaryId, Summary>,
    pub mind_maps: Table<MindMapId, MindMap>,
    pub question_answers: Table<QuestionAnswerId, QuestionAnswer>,
    pub notes: Table<NoteId, Note>,
    pub knowledge_graphs: Table<KnowledgeGraphId, KnowledgeGraph>,
    pub vector_databases: Table<VectorDatabaseId, VectorDatabase>,
    pub conversations: Table<ConversationId, Conversation>,
    pub billing_records: Table<BillingRecordId, BillingRecord>,
}

impl Tables {
    pub fn new() -> Self {
        Self {
            users: Table::new(),
            workspaces: Table::new(),
            files: Table::new(),
            models: Table::new(),
            templates: Table::new(),
            summaries: Table::new(),
            mind_maps: Table::new(),
            question_answers: Table::new(),
            notes: Table::new(),
            knowledge_graphs: Table::new(),
            vector_databases: Table::new(),
            conversations: Table::new(),
            billing_records: Table::new(),
        }
    }

    pub fn insert_user(&mut self, user: NewUser) -> Result<User> {
        if self.users.find(|u| u.username == user.username).is_some() {
            return Err(PersistError::UsernameTaken(user.username));
        }
        let now = Utc::now();
        Ok(self.users.create(|id| user.into_record(id, now)))
    }

    pub fn insert_workspace(&mut self, workspace: NewWorkspace) -> Workspace {
        let now = Utc::now();
        self.workspaces.create(|id| workspace.into_record(id, now))
    }

    pub fn insert_file(&mut self, file: NewFile) -> File {
        let now = Utc::now();
        self.files.create(|id| file.into_record(id, now))
    }

    pub fn insert_model(&mut self, model: NewAIModel) -> AIModel {
        self.models.create(|id| model.into_record(id))
    }

    /// Templates have no public create; the catalog is filled once at seed time.
    pub fn insert_template(&mut self, template: NewTemplate) -> Template {
        self.templates.create(|id| template.into_record(id))
    }

    pub fn insert_knowledge_graph(&mut self, graph: NewKnowledgeGraph) -> KnowledgeGraph {
        let now = Utc::now();
        self.knowledge_graphs.create(|id| graph.into_record(id, now))
    }

    pub fn insert_vector_database(&mut self, db: NewVectorDatabase) -> VectorDatabase {
        let now = Utc::now();
        self.vector_databases.create(|id| db.into_record(id, now))
    }

    pub fn insert_conversation(&mut self, conversation: NewConversation) -> Conversation {
        let now = Utc::now();
        self.conversations.create(|id| conversation.into_record(id, now))
    }

    pub fn insert_billing_record(&mut self, record: NewBillingRecord) -> BillingRecord {
        let now = Utc::now();
        self.billing_records.create(|id| record.into_record(id, now))
    }
}

/// Process-lifetime repository holding every entity map.
///
/// Construct one at start-up (see `StorageBuilder`) and share it behind an
/// `Arc<dyn StorageClient>`. Nothing survives a restart.
pub struct InMemoryStorage {
    tables: RwLock<Tables>,
}

impl InMemoryStorage {
    /// Empty storage, all counters at 1
    pub fn new() -> Self {
        Self::from_tables(Tables::new())
    }

    pub(crate) fn from_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageClient for InMemoryStorage {
    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.tables.read().await.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.tables.read().await.users.find(|u| u.username == username))
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let user = self.tables.write().await.insert_user(user)?;
        tracing::debug!(user_id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User> {
        let mut tables = self.tables.write().await;

        if let Some(username) = &update.username {
            let taken = tables
                .users
                .find(|u| &u.username == username && u.id != id)
                .is_some();
            if taken {
                return Err(PersistError::UsernameTaken(username.clone()));
            }
        }

        let user = tables
            .users
            .get_mut(id)
            .ok_or_else(|| PersistError::not_found("User", id.get()))?;
        update.apply(user);
        Ok(user.clone())
    }

    async fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        Ok(self.tables.read().await.workspaces.all())
    }

    async fn get_workspace(&self, id: WorkspaceId) -> Result<Option<Workspace>> {
        Ok(self.tables.read().await.workspaces.get(id))
    }

    async fn list_workspaces_by_user(&self, user_id: UserId) -> Result<Vec<Workspace>> {
        Ok(self.tables.read().await.workspaces.filter(|w| w.is_member(user_id)))
    }

    async fn create_workspace(&self, workspace: NewWorkspace) -> Result<Workspace> {
        let workspace = self.tables.write().await.insert_workspace(workspace);
        tracing::debug!(workspace_id = %workspace.id, "Created workspace");
        Ok(workspace)
    }

    async fn update_workspace(&self, id: WorkspaceId, update: WorkspaceUpdate) -> Result<Workspace> {
        let mut tables = self.tables.write().await;
        let workspace = tables
            .workspaces
            .get_mut(id)
            .ok_or_else(|| PersistError::not_found("Workspace", id.get()))?;
        update.apply(workspace, Utc::now());
        Ok(workspace.clone())
    }

    async fn list_files(&self) -> Result<Vec<File>> {
        Ok(self.tables.read().await.files.all())
    }

    async fn get_file(&self, id: FileId) -> Result<Option<File>> {
        Ok(self.tables.read().await.files.get(id))
    }

    async fn list_files_by_workspace(&self, workspace_id: WorkspaceId) -> Result<Vec<File>> {
        Ok(self
            .tables
            .read()
            .await
            .files
            .filter(|f| f.workspace_id == workspace_id))
    }

    async fn create_file(&self, file: NewFile) -> Result<File> {
        let file = self.tables.write().await.insert_file(file);
        tracing::debug!(file_id = %file.id, workspace_id = %file.workspace_id, "Created file");
        Ok(file)
    }

    async fn list_models(&self) -> Result<Vec<AIModel>> {
        Ok(self.tables.read().await.models.all())
    }

    async fn get_model(&self, id: ModelId) -> Result<Option<AIModel>> {
        Ok(self.tables.read().await.models.get(id))
    }

    async fn create_model(&self, model: NewAIModel) -> Result<AIModel> {
        Ok(self.tables.write().await.insert_model(model))
    }

    async fn update_model(&self, id: ModelId, update: AIModelUpdate) -> Result<AIModel> {
        let mut tables = self.tables.write().await;
        let model = tables
            .models
            .get_mut(id)
            .ok_or_else(|| PersistError::not_found("AI Model", id.get()))?;
        update.apply(model);
        Ok(model.clone())
    }

    async fn list_templates(&self) -> Result<Vec<Template>> {
        Ok(self.tables.read().await.templates.all())
    }

    async fn get_template(&self, id: TemplateId) -> Result<Option<Template>> {
        Ok(self.tables.read().await.templates.get(id))
    }

    async fn create_summary(&self, summary: NewSummary) -> Result<Summary> {
        let now = Utc::now();
        Ok(self
            .tables
            .write()
            .await
            .summaries
            .create(|id| summary.into_record(id, now)))
    }

    async fn get_summary(&self, id: SummaryId) -> Result<Option<Summary>> {
        Ok(self.tables.read().await.summaries.get(id))
    }

    async fn list_summaries_by_file(&self, file_id: FileId) -> Result<Vec<Summary>> {
        Ok(self.tables.read().await.summaries.filter(|s| s.file_id == file_id))
    }

    async fn create_mind_map(&self, mind_map: NewMindMap) -> Result<MindMap> {
        let now = Utc::now();
        Ok(self
            .tables
            .write()
            .await
            .mind_maps
            .create(|id| mind_map.into_record(id, now)))
    }

    async fn get_mind_map(&self, id: MindMapId) -> Result<Option<MindMap>> {
        Ok(self.tables.read().await.mind_maps.get(id))
    }

    async fn list_mind_maps_by_file(&self, file_id: FileId) -> Result<Vec<MindMap>> {
        Ok(self.tables.read().await.mind_maps.filter(|m| m.file_id == file_id))
    }

    async fn create_question_answer(&self, qa: NewQuestionAnswer) -> Result<QuestionAnswer> {
        let now = Utc::now();
        Ok(self
            .tables
            .write()
            .await
            .question_answers
            .create(|id| qa.into_record(id, now)))
    }

    async fn list_question_answers_by_workspace(
        &self,
        workspace_id: WorkspaceId,
    ) -> Result<Vec<QuestionAnswer>> {
        Ok(self
            .tables
            .read()
            .await
            .question_answers
            .filter(|qa| qa.workspace_id == workspace_id))
    }

    async fn create_note(&self, note: NewNote) -> Result<Note> {
        let now = Utc::now();
        Ok(self.tables.write().await.notes.create(|id| note.into_record(id, now)))
    }

    async fn get_note(&self, id: NoteId) -> Result<Option<Note>> {
        Ok(self.tables.read().await.notes.get(id))
    }

    async fn list_notes_by_workspace(&self, workspace_id: WorkspaceId) -> Result<Vec<Note>> {
        Ok(self
            .tables
            .read()
            .await
            .notes
            .filter(|n| n.workspace_id == workspace_id))
    }

    async fn update_note(&self, id: NoteId, update: NoteUpdate) -> Result<Note> {
        let mut tables = self.tables.write().await;
        let note = tables
            .notes
            .get_mut(id)
            .ok_or_else(|| PersistError::not_found("Note", id.get()))?;
        update.apply(note, Utc::now());
        Ok(note.clone())
    }

    async fn list_knowledge_graphs_by_user(&self, user_id: UserId) -> Result<Vec<KnowledgeGraph>> {
        Ok(self
            .tables
            .read()
            .await
            .knowledge_graphs
            .filter(|g| g.user_id == user_id))
    }

    async fn get_knowledge_graph(&self, id: KnowledgeGraphId) -> Result<Option<KnowledgeGraph>> {
        Ok(self.tables.read().await.knowledge_graphs.get(id))
    }

    async fn create_knowledge_graph(&self, graph: NewKnowledgeGraph) -> Result<KnowledgeGraph> {
        Ok(self.tables.write().await.insert_knowledge_graph(graph))
    }

    async fn list_vector_databases_by_user(&self, user_id: UserId) -> Result<Vec<VectorDatabase>> {
        Ok(self
            .tables
            .read()
            .await
            .vector_databases
            .filter(|db| db.user_id == user_id))
    }

    async fn get_vector_database(&self, id: VectorDatabaseId) -> Result<Option<VectorDatabase>> {
        Ok(self.tables.read().await.vector_databases.get(id))
    }

    async fn create_vector_database(&self, db: NewVectorDatabase) -> Result<VectorDatabase> {
        Ok(self.tables.write().await.insert_vector_database(db))
    }

    async fn list_conversations_by_user(&self, user_id: UserId) -> Result<Vec<Conversation>> {
        Ok(self
            .tables
            .read()
            .await
            .conversations
            .filter(|c| c.user_id == user_id))
    }

    async fn get_conversation(&self, id: ConversationId) -> Result<Option<Conversation>> {
        Ok(self.tables.read().await.conversations.get(id))
    }

    async fn create_conversation(&self, conversation: NewConversation) -> Result<Conversation> {
        let conversation = self.tables.write().await.insert_conversation(conversation);
        tracing::debug!(conversation_id = %conversation.id, "Created conversation");
        Ok(conversation)
    }

    async fn update_conversation(
        &self,
        id: ConversationId,
        update: ConversationUpdate,
    ) -> Result<Conversation> {
        let mut tables = self.tables.write().await;
        let conversation = tables
            .conversations
            .get_mut(id)
            .ok_or_else(|| PersistError::not_found("Conversation", id.get()))?;
        update.apply(conversation, Utc::now());
        Ok(conversation.clone())
    }

    async fn append_message(
        &self,
        id: ConversationId,
        message: ConversationMessage,
    ) -> Result<Conversation> {
        let mut tables = self.tables.write().await;
        let conversation = tables
            .conversations
            .get_mut(id)
            .ok_or_else(|| PersistError::not_found("Conversation", id.get()))?;
        conversation.updated_at = message.timestamp;
        conversation.messages.push(message);
        Ok(conversation.clone())
    }

    async fn list_billing_records_by_user(&self, user_id: UserId) -> Result<Vec<BillingRecord>> {
        Ok(self
            .tables
            .read()
            .await
            .billing_records
            .filter(|r| r.user_id == user_id))
    }

    async fn create_billing_record(&self, record: NewBillingRecord) -> Result<BillingRecord> {
        Ok(self.tables.write().await.insert_billing_record(record))
    }

    async fn counts(&self) -> Result<EntityCounts> {
        let tables = self.tables.read().await;
        Ok(EntityCounts {
            users: tables.users.len(),
            workspaces: tables.workspaces.len(),
            files: tables.files.len(),
            models: tables.models.len(),
            templates: tables.templates.len(),
            knowledge_graphs: tables.knowledge_graphs.len(),
            vector_databases: tables.vector_databases.len(),
            conversations: tables.conversations.len(),
            billing_records: tables.billing_records.len(),
        })
    }
}
