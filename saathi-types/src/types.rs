//! Conversation model: roles, turns, languages.

use serde::{Deserialize, Serialize};

/// The author of a [`Turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A human user.
    User,
    /// The model/assistant.
    Assistant,
}

/// One message in the conversation.
///
/// Serializes to the wire shape `{"role":"user","content":"..."}` used
/// by the gateway request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who authored this turn.
    pub role: Role,
    /// The message text.
    pub content: String,
}

impl Turn {
    /// A user turn with the given content.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// An assistant turn with the given content.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Active conversation language.
///
/// Serializes to the `"en"` / `"hi"` tags the gateway expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Hindi.
    Hi,
}
