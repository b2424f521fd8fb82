use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::TemplateId;

/// Entry of the read-only template catalog.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTemplate {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

impl NewTemplate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    pub fn into_record(self, id: TemplateId) -> Template {
        Template {
            id,
            name: self.name,
            description: self.description,
            icon: self.icon,
            color: self.color,
        }
    }
}
