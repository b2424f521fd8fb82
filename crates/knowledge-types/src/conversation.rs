use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{ConversationId, ModelId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn new(role: MessageRole, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
        }
    }

    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(MessageRole::User, content, timestamp)
    }

    pub fn assistant(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(MessageRole::Assistant, content, timestamp)
    }
}

/// Chat transcript; `messages` keeps append order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub messages: Vec<ConversationMessage>,
    pub model_id: ModelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewConversation {
    pub title: String,
    pub model_id: ModelId,
    pub user_id: UserId,
    #[serde(default)]
    pub messages: Vec<ConversationMessage>,
}

impl NewConversation {
    pub fn new(title: impl Into<String>, model_id: ModelId, user_id: UserId) -> Self {
        Self {
            title: title.into(),
            model_id,
            user_id,
            messages: Vec::new(),
        }
    }

    pub fn with_messages(mut self, messages: Vec<ConversationMessage>) -> Self {
        self.messages = messages;
        self
    }

    pub fn into_record(self, id: ConversationId, now: DateTime<Utc>) -> Conversation {
        Conversation {
            id,
            title: self.title,
            messages: self.messages,
            model_id: self.model_id,
            created_at: now,
            updated_at: now,
            user_id: self.user_id,
        }
    }
}

/// Whole-field replacement patch. `messages`, when given, replaces the transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversationUpdate {
    pub title: Option<String>,
    pub messages: Option<Vec<ConversationMessage>>,
    pub model_id: Option<ModelId>,
}

impl ConversationUpdate {
    pub fn apply(self, conversation: &mut Conversation, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            conversation.title = title;
        }
        if let Some(messages) = self.messages {
            conversation.messages = messages;
        }
        if let Some(model_id) = self.model_id {
            conversation.model_id = model_id;
        }
        conversation.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_role_wire_names() {
        let msg = ConversationMessage::assistant("Hi", Utc::now());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], json!("assistant"));
    }

    #[test]
    fn test_update_replaces_messages_and_stamps() {
        let created = Utc::now() - chrono::Duration::minutes(5);
        let mut conversation = NewConversation::new("Chat", ModelId(1), UserId(1))
            .with_messages(vec![ConversationMessage::user("Hello", created)])
            .into_record(ConversationId(1), created);

        let now = Utc::now();
        ConversationUpdate {
            messages: Some(Vec::new()),
            ..Default::default()
        }
        .apply(&mut conversation, now);

        assert!(conversation.messages.is_empty());
        assert_eq!(conversation.title, "Chat");
        assert_eq!(conversation.created_at, created);
        assert_eq!(conversation.updated_at, now);
    }
}
