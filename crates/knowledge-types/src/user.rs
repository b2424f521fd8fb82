use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::UserId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Basic,
    Premium,
    Enterprise,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub name: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub role: UserRole,
    pub plan: Plan,
    pub usage_tokens: u64,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub preferences: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub usage_tokens: Option<u64>,
    #[serde(default)]
    pub stripe_customer_id: Option<String>,
    #[serde(default)]
    pub stripe_subscription_id: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub preferences: Option<serde_json::Value>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn with_usage_tokens(mut self, tokens: u64) -> Self {
        self.usage_tokens = Some(tokens);
        self
    }

    pub fn with_preferences(mut self, preferences: serde_json::Value) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn into_record(self, id: UserId, now: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            name: self.name,
            avatar: self.avatar,
            email: self.email,
            bio: self.bio,
            role: self.role.unwrap_or_default(),
            plan: self.plan.unwrap_or_default(),
            usage_tokens: self.usage_tokens.unwrap_or(0),
            stripe_customer_id: self.stripe_customer_id,
            stripe_subscription_id: self.stripe_subscription_id,
            preferences: self.preferences,
            created_at: now,
        }
    }
}

/// Partial user update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub role: Option<UserRole>,
    pub plan: Option<Plan>,
    pub usage_tokens: Option<u64>,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub preferences: Option<serde_json::Value>,
}

impl UserUpdate {
    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(password) = self.password {
            user.password = Some(password);
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(email) = self.email {
            user.email = Some(email);
        }
        if let Some(bio) = self.bio {
            user.bio = Some(bio);
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(plan) = self.plan {
            user.plan = plan;
        }
        if let Some(tokens) = self.usage_tokens {
            user.usage_tokens = tokens;
        }
        if let Some(customer_id) = self.stripe_customer_id {
            user.stripe_customer_id = Some(customer_id);
        }
        if let Some(subscription_id) = self.stripe_subscription_id {
            user.stripe_subscription_id = Some(subscription_id);
        }
        if let Some(preferences) = self.preferences {
            user.preferences = Some(preferences);
        }
    }
}
