// Chat session and message DTOs
//
// Session and message endpoints return bare resources, not the ApiResponse envelope.

use crate::common::null_to_default;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Archived,
    Deleted,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Archived => write!(f, "archived"),
            SessionStatus::Deleted => write!(f, "deleted"),
        }
    }
}

/// Conversation between a user and an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub agent_id: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
    pub status: SessionStatus,
    #[serde(default, deserialize_with = "null_to_default")]
    pub is_pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// Request to create a session; both fields may be left to the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
            MessageRole::System => write!(f, "system"),
        }
    }
}

/// Kind of payload a message holds
///
/// The backend stores the tag as free text, so unknown tags are kept
/// verbatim and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    Text,
    Sql,
    Result,
    Error,
    Other(String),
}

impl MessageType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => MessageType::Text,
            "sql" => MessageType::Sql,
            "result" => MessageType::Result,
            "error" => MessageType::Error,
            other => MessageType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Text => "text",
            MessageType::Sql => "sql",
            MessageType::Result => "result",
            MessageType::Error => "error",
            MessageType::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match MessageType::from_tag(s) {
            MessageType::Other(_) => Err(format!("Unknown message type: {}", s)),
            known => Ok(known),
        }
    }
}

impl Serialize for MessageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessageType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(MessageType::from_tag(&tag))
    }
}

/// Message persisted in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub session_id: String,
    pub role: MessageRole,
    pub content: String,
    pub message_type: MessageType,
    /// JSON-encoded metadata blob
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_needed: Option<bool>,
}

impl ChatMessage {
    /// Plain text message; the session id is filled in when it is saved
    pub fn text(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: None,
            session_id: String::new(),
            role,
            content: content.into(),
            message_type: MessageType::Text,
            metadata: None,
            create_time: None,
            title_needed: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::text(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::text(MessageRole::Assistant, content)
    }

    pub fn with_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn with_metadata(mut self, metadata: &serde_json::Value) -> Self {
        self.metadata = Some(metadata.to_string());
        self
    }

    /// Decode the metadata blob, if present and valid JSON
    pub fn metadata_value(&self) -> Option<serde_json::Value> {
        self.metadata
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}
