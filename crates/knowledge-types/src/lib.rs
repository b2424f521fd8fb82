//! Entity schemas shared by the storage service and the HTTP API.
//!
//! Every entity comes in three shapes:
//!
//! - the stored record (`Workspace`, `File`, ...), always carrying its id
//! - an insert payload (`NewWorkspace`, `NewFile`, ...) with named optional fields
//! - where the entity is mutable, a patch (`WorkspaceUpdate`, ...) whose `Some`
//!   fields replace the stored values
//!
//! Defaults are filled by the `into_record` constructors, so the storage layer
//! only assigns ids and timestamps.

pub mod ids;
pub mod user;
pub mod workspace;
pub mod file;
pub mod ai_model;
pub mod template;
pub mod generated;
pub mod knowledge_graph;
pub mod vector_database;
pub mod conversation;
pub mod billing;

pub use ids::{
    BillingRecordId, ConversationId, FileId, KnowledgeGraphId, MindMapId, ModelId, NoteId,
    ParseIdError, QuestionAnswerId, SummaryId, TemplateId, UserId, VectorDatabaseId, WorkspaceId,
};
pub use user::{NewUser, Plan, User, UserRole, UserUpdate};
pub use workspace::{NewWorkspace, Workspace, WorkspaceUpdate};
pub use file::{File, FileType, NewFile};
pub use ai_model::{AIModel, AIModelUpdate, NewAIModel};
pub use template::{NewTemplate, Template};
pub use generated::{
    MindMap, NewMindMap, NewNote, NewQuestionAnswer, NewSummary, Note, NoteUpdate,
    QuestionAnswer, Summary, SummaryLength,
};
pub use knowledge_graph::{GraphEdge, GraphNode, KnowledgeGraph, NewKnowledgeGraph, NodePosition};
pub use vector_database::{NewVectorDatabase, VectorDatabase};
pub use conversation::{
    Conversation, ConversationMessage, ConversationUpdate, MessageRole, NewConversation,
};
pub use billing::{BillingRecord, BillingStatus, NewBillingRecord};
