use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{KnowledgeGraphId, UserId, WorkspaceId};

/// Placement of a node, expressed as CSS-style coordinates (e.g. `"50%"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NodePosition {
    pub x: String,
    pub y: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub position: NodePosition,
    pub color: String,
}

impl GraphNode {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        x: impl Into<String>,
        y: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: NodePosition {
                x: x.into(),
                y: y.into(),
            },
            color: color.into(),
        }
    }
}

/// Directed link between two node ids. Targets are not checked against the node list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeGraph {
    pub id: KnowledgeGraphId,
    pub title: String,
    pub description: Option<String>,
    pub workspace_id: WorkspaceId,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewKnowledgeGraph {
    pub title: String,
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl NewKnowledgeGraph {
    pub fn new(title: impl Into<String>, workspace_id: WorkspaceId, user_id: UserId) -> Self {
        Self {
            title: title.into(),
            workspace_id,
            user_id,
            description: None,
            nodes: Vec::new(),
            edges: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_nodes(mut self, nodes: Vec<GraphNode>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_edges(mut self, edges: Vec<GraphEdge>) -> Self {
        self.edges = edges;
        self
    }

    pub fn into_record(self, id: KnowledgeGraphId, now: DateTime<Utc>) -> KnowledgeGraph {
        KnowledgeGraph {
            id,
            title: self.title,
            description: self.description,
            workspace_id: self.workspace_id,
            nodes: self.nodes,
            edges: self.edges,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
            user_id: self.user_id,
        }
    }
}
