use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{UserId, VectorDatabaseId};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VectorDatabase {
    pub id: VectorDatabaseId,
    pub name: String,
    pub description: Option<String>,
    pub provider: String,
    pub connection_string: Option<String>,
    /// Provider-specific settings such as `{"dimensions": 1536, "metric": "cosine"}`
    #[schema(value_type = Option<Object>)]
    pub settings: Option<serde_json::Value>,
    pub vector_count: u64,
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVectorDatabase {
    pub name: String,
    pub provider: String,
    pub user_id: UserId,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub connection_string: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub settings: Option<serde_json::Value>,
    #[serde(default)]
    pub vector_count: Option<u64>,
}

impl NewVectorDatabase {
    pub fn new(name: impl Into<String>, provider: impl Into<String>, user_id: UserId) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            user_id,
            description: None,
            connection_string: None,
            settings: None,
            vector_count: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_settings(mut self, settings: serde_json::Value) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_vector_count(mut self, count: u64) -> Self {
        self.vector_count = Some(count);
        self
    }

    pub fn into_record(self, id: VectorDatabaseId, now: DateTime<Utc>) -> VectorDatabase {
        VectorDatabase {
            id,
            name: self.name,
            description: self.description,
            provider: self.provider,
            connection_string: self.connection_string,
            settings: self.settings,
            vector_count: self.vector_count.unwrap_or(0),
            created_at: now,
            user_id: self.user_id,
        }
    }
}
