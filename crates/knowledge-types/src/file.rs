use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{FileId, WorkspaceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
    Txt,
    Youtube,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub id: FileId,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Size in megabytes; zero for videos
    pub size: f64,
    pub preview: Option<String>,
    pub workspace_id: WorkspaceId,
    pub uploaded_at: DateTime<Utc>,
    /// Playback length such as `14:32`, only set for videos
    pub duration: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewFile {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub workspace_id: WorkspaceId,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl NewFile {
    pub fn new(name: impl Into<String>, file_type: FileType, workspace_id: WorkspaceId) -> Self {
        Self {
            name: name.into(),
            file_type,
            workspace_id,
            size: None,
            preview: None,
            uploaded_at: None,
            duration: None,
            is_active: None,
        }
    }

    pub fn with_size(mut self, megabytes: f64) -> Self {
        self.size = Some(megabytes);
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn uploaded_at(mut self, at: DateTime<Utc>) -> Self {
        self.uploaded_at = Some(at);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn into_record(self, id: FileId, now: DateTime<Utc>) -> File {
        File {
            id,
            name: self.name,
            file_type: self.file_type,
            size: self.size.unwrap_or(0.0),
            preview: self.preview,
            workspace_id: self.workspace_id,
            uploaded_at: self.uploaded_at.unwrap_or(now),
            duration: self.duration,
            is_active: self.is_active.unwrap_or(false),
        }
    }
}
