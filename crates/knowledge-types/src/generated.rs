//! Artifacts produced from files and workspaces: summaries, mind maps,
//! question/answer pairs and free-form notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{
    FileId, MindMapId, ModelId, NoteId, QuestionAnswerId, SummaryId, UserId, WorkspaceId,
};
use crate::knowledge_graph::{GraphEdge, GraphNode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    #[default]
    Brief,
    Detailed,
    Comprehensive,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: SummaryId,
    pub file_id: FileId,
    pub content: String,
    pub generated_at: DateTime<Utc>,
    pub model_id: ModelId,
    pub length: SummaryLength,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSummary {
    pub file_id: FileId,
    pub content: String,
    pub model_id: ModelId,
    #[serde(default)]
    pub length: Option<SummaryLength>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl NewSummary {
    pub fn new(file_id: FileId, model_id: ModelId, content: impl Into<String>) -> Self {
        Self {
            file_id,
            content: content.into(),
            model_id,
            length: None,
            generated_at: None,
        }
    }

    pub fn with_length(mut self, length: SummaryLength) -> Self {
        self.length = Some(length);
        self
    }

    pub fn into_record(self, id: SummaryId, now: DateTime<Utc>) -> Summary {
        Summary {
            id,
            file_id: self.file_id,
            content: self.content,
            generated_at: self.generated_at.unwrap_or(now),
            model_id: self.model_id,
            length: self.length.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MindMap {
    pub id: MindMapId,
    pub title: String,
    pub file_id: FileId,
    pub nodes: Vec<GraphNode>,
    pub connections: Vec<GraphEdge>,
    pub generated_at: DateTime<Utc>,
    pub model_id: ModelId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMindMap {
    pub title: String,
    pub file_id: FileId,
    pub model_id: ModelId,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub connections: Vec<GraphEdge>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl NewMindMap {
    pub fn new(title: impl Into<String>, file_id: FileId, model_id: ModelId) -> Self {
        Self {
            title: title.into(),
            file_id,
            model_id,
            nodes: Vec::new(),
            connections: Vec::new(),
            generated_at: None,
        }
    }

    pub fn with_nodes(mut self, nodes: Vec<GraphNode>, connections: Vec<GraphEdge>) -> Self {
        self.nodes = nodes;
        self.connections = connections;
        self
    }

    pub fn into_record(self, id: MindMapId, now: DateTime<Utc>) -> MindMap {
        MindMap {
            id,
            title: self.title,
            file_id: self.file_id,
            nodes: self.nodes,
            connections: self.connections,
            generated_at: self.generated_at.unwrap_or(now),
            model_id: self.model_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswer {
    pub id: QuestionAnswerId,
    pub question: String,
    pub answer: String,
    pub sources: Vec<String>,
    pub workspace_id: WorkspaceId,
    pub generated_at: DateTime<Utc>,
    pub model_id: ModelId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestionAnswer {
    pub question: String,
    pub answer: String,
    pub workspace_id: WorkspaceId,
    pub model_id: ModelId,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl NewQuestionAnswer {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        workspace_id: WorkspaceId,
        model_id: ModelId,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            workspace_id,
            model_id,
            sources: Vec::new(),
            generated_at: None,
        }
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    pub fn into_record(self, id: QuestionAnswerId, now: DateTime<Utc>) -> QuestionAnswer {
        QuestionAnswer {
            id,
            question: self.question,
            answer: self.answer,
            sources: self.sources,
            workspace_id: self.workspace_id,
            generated_at: self.generated_at.unwrap_or(now),
            model_id: self.model_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub workspace_id: WorkspaceId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
}

impl NewNote {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        workspace_id: WorkspaceId,
        user_id: UserId,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            workspace_id,
            user_id,
        }
    }

    pub fn into_record(self, id: NoteId, now: DateTime<Utc>) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            workspace_id: self.workspace_id,
            created_at: now,
            updated_at: now,
            user_id: self.user_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteUpdate {
    pub fn apply(self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        note.updated_at = now;
    }
}
