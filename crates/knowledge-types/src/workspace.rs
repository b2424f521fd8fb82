use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;

use crate::ids::{UserId, WorkspaceId};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub description: Option<String>,
    pub color_id: u32,
    pub project_type: u32,
    pub file_count: u32,
    pub views: u32,
    pub last_modified: DateTime<Utc>,
    pub is_private: bool,
    pub owner_id: UserId,
    #[schema(value_type = Vec<u32>)]
    pub collaborators: BTreeSet<UserId>,
}

impl Workspace {
    /// True when the user owns the workspace or is listed as a collaborator.
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.owner_id == user_id || self.collaborators.contains(&user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkspace {
    pub name: String,
    pub owner_id: UserId,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color_id: Option<u32>,
    #[serde(default)]
    pub project_type: Option<u32>,
    #[serde(default)]
    pub file_count: Option<u32>,
    #[serde(default)]
    pub views: Option<u32>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    #[schema(value_type = Vec<u32>)]
    pub collaborators: BTreeSet<UserId>,
}

impl NewWorkspace {
    pub fn new(name: impl Into<String>, owner_id: UserId) -> Self {
        Self {
            name: name.into(),
            owner_id,
            description: None,
            color_id: None,
            project_type: None,
            file_count: None,
            views: None,
            last_modified: None,
            is_private: None,
            collaborators: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color_id: u32) -> Self {
        self.color_id = Some(color_id);
        self
    }

    pub fn with_project_type(mut self, project_type: u32) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn with_stats(mut self, file_count: u32, views: u32) -> Self {
        self.file_count = Some(file_count);
        self.views = Some(views);
        self
    }

    pub fn with_last_modified(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified = Some(at);
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }

    pub fn with_collaborator(mut self, user_id: UserId) -> Self {
        self.collaborators.insert(user_id);
        self
    }

    pub fn into_record(self, id: WorkspaceId, now: DateTime<Utc>) -> Workspace {
        Workspace {
            id,
            name: self.name,
            description: self.description,
            color_id: self.color_id.unwrap_or(0),
            project_type: self.project_type.unwrap_or(0),
            file_count: self.file_count.unwrap_or(0),
            views: self.views.unwrap_or(0),
            last_modified: self.last_modified.unwrap_or(now),
            is_private: self.is_private.unwrap_or(false),
            owner_id: self.owner_id,
            collaborators: self.collaborators,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color_id: Option<u32>,
    pub project_type: Option<u32>,
    pub file_count: Option<u32>,
    pub views: Option<u32>,
    pub is_private: Option<bool>,
    #[schema(value_type = Option<Vec<u32>>)]
    pub collaborators: Option<BTreeSet<UserId>>,
}

impl WorkspaceUpdate {
    /// Applies the patch and stamps `last_modified`.
    pub fn apply(self, workspace: &mut Workspace, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            workspace.name = name;
        }
        if let Some(description) = self.description {
            workspace.description = Some(description);
        }
        if let Some(color_id) = self.color_id {
            workspace.color_id = color_id;
        }
        if let Some(project_type) = self.project_type {
            workspace.project_type = project_type;
        }
        if let Some(file_count) = self.file_count {
            workspace.file_count = file_count;
        }
        if let Some(views) = self.views {
            workspace.views = views;
        }
        if let Some(is_private) = self.is_private {
            workspace.is_private = is_private;
        }
        if let Some(collaborators) = self.collaborators {
            workspace.collaborators = collaborators;
        }
        workspace.last_modified = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_membership_uses_typed_ids() {
        let workspace = NewWorkspace::new("Research", UserId(1))
            .with_collaborator(UserId(2))
            .into_record(WorkspaceId(1), Utc::now());

        assert!(workspace.is_member(UserId(1)));
        assert!(workspace.is_member(UserId(2)));
        assert!(!workspace.is_member(UserId(3)));
    }

    #[test]
    fn test_collaborators_serialize_as_numbers() {
        let workspace = NewWorkspace::new("Research", UserId(1))
            .with_collaborator(UserId(3))
            .with_collaborator(UserId(2))
            .into_record(WorkspaceId(4), Utc::now());

        let json = serde_json::to_value(&workspace).unwrap();
        assert_eq!(json["collaborators"], json!([2, 3]));
        assert_eq!(json["ownerId"], json!(1));
        assert_eq!(json["isPrivate"], json!(false));
    }

    #[test]
    fn test_update_refreshes_last_modified() {
        let created = Utc::now() - chrono::Duration::days(2);
        let mut workspace = NewWorkspace::new("Research", UserId(1))
            .with_last_modified(created)
            .into_record(WorkspaceId(1), created);

        let now = Utc::now();
        WorkspaceUpdate {
            views: Some(10),
            ..Default::default()
        }
        .apply(&mut workspace, now);

        assert_eq!(workspace.views, 10);
        assert_eq!(workspace.last_modified, now);
        assert_eq!(workspace.name, "Research");
    }
}
