use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: u32 },
    
    #[error("Username already taken: {0}")]
    UsernameTaken(String),
    
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PersistError {
    pub fn not_found(entity: &'static str, id: impl Into<u32>) -> Self {
        Self::NotFound { entity, id: id.into() }
    }
    
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, PersistError>;

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_not_found_message_embeds_id() {
        let err = PersistError::not_found("Conversation", 9999u32);
        assert_eq!(err.to_string(), "Conversation with id 9999 not found");
        assert!(err.is_not_found());
    }
}
