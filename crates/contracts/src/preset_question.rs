// Preset question DTOs

use serde::{Deserialize, Serialize};

/// Suggested question shown on an agent's chat page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub agent_id: i64,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

/// Question as submitted in a batch save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetQuestionInput {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl PresetQuestionInput {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            is_active: None,
        }
    }

    pub fn inactive(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            is_active: Some(false),
        }
    }
}

impl From<&PresetQuestion> for PresetQuestionInput {
    fn from(question: &PresetQuestion) -> Self {
        Self {
            question: question.question.clone(),
            is_active: question.is_active,
        }
    }
}

/// Wire form of a question in a batch save; `is_active` is always explicit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetQuestionPayload {
    pub question: String,
    pub is_active: bool,
}

impl From<&PresetQuestionInput> for PresetQuestionPayload {
    fn from(input: &PresetQuestionInput) -> Self {
        Self {
            question: input.question.clone(),
            is_active: input.is_active.unwrap_or(true),
        }
    }
}
