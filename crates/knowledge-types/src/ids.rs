use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// A path segment that is not a plain decimal `u32`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id: {0:?}")]
pub struct ParseIdError(pub String);

/// Declares a typed integer identifier.
///
/// Ids serialize as bare JSON numbers and parse from decimal strings, so a
/// `UserId` can never be compared against a `WorkspaceId` by accident.
macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
                Serialize, Deserialize, ToSchema,
            )]
            pub struct $name(pub u32);

            impl $name {
                pub const fn new(value: u32) -> Self {
                    Self(value)
                }

                pub const fn get(self) -> u32 {
                    self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = ParseIdError;

                /// Accepts ASCII digits only; signs and whitespace are rejected.
                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(ParseIdError(s.to_string()));
                    }
                    s.parse::<u32>()
                        .map(Self)
                        .map_err(|_| ParseIdError(s.to_string()))
                }
            }

            impl From<u32> for $name {
                fn from(value: u32) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

define_id!(
    UserId,
    WorkspaceId,
    FileId,
    /// Identifier of an AI model entry in the model catalog
    ModelId,
    TemplateId,
    SummaryId,
    MindMapId,
    QuestionAnswerId,
    NoteId,
    KnowledgeGraphId,
    VectorDatabaseId,
    ConversationId,
    BillingRecordId,
);
