use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::ModelId;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AIModel {
    pub id: ModelId,
    pub name: String,
    pub provider: String,
    pub icon: String,
    pub color: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAIModel {
    pub name: String,
    pub provider: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl NewAIModel {
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            icon: icon.into(),
            color: color.into(),
            is_active: None,
        }
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn into_record(self, id: ModelId) -> AIModel {
        AIModel {
            id,
            name: self.name,
            provider: self.provider,
            icon: self.icon,
            color: self.color,
            is_active: self.is_active.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AIModelUpdate {
    pub name: Option<String>,
    pub provider: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

impl AIModelUpdate {
    pub fn apply(self, model: &mut AIModel) {
        if let Some(name) = self.name {
            model.name = name;
        }
        if let Some(provider) = self.provider {
            model.provider = provider;
        }
        if let Some(icon) = self.icon {
            model.icon = icon;
        }
        if let Some(color) = self.color {
            model.color = color;
        }
        if let Some(is_active) = self.is_active {
            model.is_active = is_active;
        }
    }
}
