// Model provider configuration DTOs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelType {
    Chat,
    Embedding,
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelType::Chat => write!(f, "CHAT"),
            ModelType::Embedding => write!(f, "EMBEDDING"),
        }
    }
}

impl std::str::FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CHAT" => Ok(ModelType::Chat),
            "EMBEDDING" => Ok(ModelType::Embedding),
            _ => Err(format!("Unknown model type: {}", s)),
        }
    }
}

/// LLM provider configuration
///
/// `completions_path` and `embeddings_path` are only set when a vendor does
/// not follow the OpenAI-compatible paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Vendor label, e.g. "openai" or "deepseek"
    pub provider: String,
    pub api_key: String,
    pub base_url: String,
    pub model_name: String,
    pub model_type: ModelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completions_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddings_path: Option<String>,
}

impl ModelConfig {
    pub fn new(
        provider: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model_name: impl Into<String>,
        model_type: ModelType,
    ) -> Self {
        Self {
            id: None,
            provider: provider.into(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model_name: model_name.into(),
            model_type,
            temperature: None,
            max_tokens: None,
            is_active: None,
            completions_path: None,
            embeddings_path: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }

    /// API key with all but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}
