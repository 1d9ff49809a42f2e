//! Message domain types.
//!
//! These are the value objects that flow into the provider: the prompt
//! assembler produces a role-tagged message sequence, the provider turns it
//! into a completion request.

use serde::{Deserialize, Serialize};

/// The role of a message in a prompt sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user (inputs and questions)
    User,
    /// The model (few-shot answers, completions)
    Assistant,
    /// System instructions (task description, output format rules)
    System,
}

/// A single role-tagged text block in a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who "speaks" this block
    pub role: Role,

    /// The text content
    pub content: String,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_message() {
        let msg = Message::user("Is this a question?");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Is this a question?");
    }

    #[test]
    fn message_serialization_roundtrip() {
        let msg = Message::assistant("A verdict");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, msg);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::System).unwrap();
        assert_eq!(json, "\"system\"");
    }
}
