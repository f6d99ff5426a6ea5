// Agent knowledge DTOs

use crate::common::{null_to_default, EmbeddingStatus};
use serde::{Deserialize, Serialize};

/// Kind of knowledge attached to an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnowledgeType {
    Document,
    Qa,
    Faq,
}

impl std::fmt::Display for KnowledgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KnowledgeType::Document => write!(f, "DOCUMENT"),
            KnowledgeType::Qa => write!(f, "QA"),
            KnowledgeType::Faq => write!(f, "FAQ"),
        }
    }
}

impl std::str::FromStr for KnowledgeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DOCUMENT" => Ok(KnowledgeType::Document),
            "QA" => Ok(KnowledgeType::Qa),
            "FAQ" => Ok(KnowledgeType::Faq),
            _ => Err(format!("Unknown knowledge type: {}", s)),
        }
    }
}

/// Knowledge item owned by an agent
///
/// `content` is only populated for QA and FAQ items; documents carry their
/// source file metadata instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentKnowledge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub knowledge_type: Option<KnowledgeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// true = recalled during retrieval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recall: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_status: Option<EmbeddingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

impl AgentKnowledge {
    /// New question/answer style item; identity is left for the backend
    pub fn new(
        agent_id: i64,
        knowledge_type: KnowledgeType,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: Some(agent_id),
            knowledge_type: Some(knowledge_type),
            title: Some(title.into()),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Set the question (QA and FAQ items)
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Fields a caller may write, with server-assigned ones cleared
    pub fn writable(&self) -> Self {
        Self {
            id: None,
            embedding_status: None,
            error_msg: None,
            created_time: None,
            updated_time: None,
            ..self.clone()
        }
    }
}

/// Filters for the paginated knowledge query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentKnowledgeQuery {
    pub agent_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub knowledge_type: Option<KnowledgeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_status: Option<EmbeddingStatus>,
    #[serde(default = "default_page_num")]
    pub page_num: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_num() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl AgentKnowledgeQuery {
    /// First page of an agent's knowledge with default page size
    pub fn new(agent_id: i64) -> Self {
        Self {
            agent_id,
            title: None,
            knowledge_type: None,
            embedding_status: None,
            page_num: default_page_num(),
            page_size: default_page_size(),
        }
    }

    pub fn with_page(mut self, page_num: i64, page_size: i64) -> Self {
        self.page_num = page_num;
        self.page_size = page_size;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_type(mut self, knowledge_type: KnowledgeType) -> Self {
        self.knowledge_type = Some(knowledge_type);
        self
    }

    pub fn with_embedding_status(mut self, status: EmbeddingStatus) -> Self {
        self.embedding_status = Some(status);
        self
    }
}

/// Knowledge counts for one agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeStatistics {
    #[serde(default, deserialize_with = "null_to_default")]
    pub total_count: i64,
    /// `[type, count]` pairs as returned by the backend
    #[serde(default, deserialize_with = "null_to_default")]
    pub type_statistics: Vec<(String, i64)>,
}
