// Business knowledge (terminology) DTOs

use crate::common::{null_to_default, EmbeddingStatus};
use serde::{Deserialize, Serialize};

/// Business term with its description and synonyms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessKnowledge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub agent_id: i64,
    pub business_term: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub description: String,
    /// Comma-separated
    #[serde(default, deserialize_with = "null_to_default")]
    pub synonyms: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub is_recall: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_status: Option<EmbeddingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

impl BusinessKnowledge {
    /// Split the synonym list, dropping blanks
    pub fn synonym_list(&self) -> Vec<&str> {
        self.synonyms
            .split([',', '，'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Request to create a business term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessKnowledgeRequest {
    pub business_term: String,
    pub description: String,
    pub synonyms: String,
    pub is_recall: bool,
    pub agent_id: i64,
}

/// Request to update a business term
///
/// Recall state is changed through the dedicated recall endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessKnowledgeRequest {
    pub business_term: String,
    pub description: String,
    pub synonyms: String,
    pub agent_id: i64,
}

impl From<&BusinessKnowledge> for UpdateBusinessKnowledgeRequest {
    fn from(knowledge: &BusinessKnowledge) -> Self {
        Self {
            business_term: knowledge.business_term.clone(),
            description: knowledge.description.clone(),
            synonyms: knowledge.synonyms.clone(),
            agent_id: knowledge.agent_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_wire_format() {
        let request = CreateBusinessKnowledgeRequest {
            business_term: "GMV".to_string(),
            description: "Gross merchandise volume".to_string(),
            synonyms: "成交额,交易额".to_string(),
            is_recall: true,
            agent_id: 2,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "businessTerm": "GMV",
                "description": "Gross merchandise volume",
                "synonyms": "成交额,交易额",
                "isRecall": true,
                "agentId": 2
            })
        );
    }

    #[test]
    fn test_synonym_list() {
        let knowledge = BusinessKnowledge {
            synonyms: "a, b，c,,".to_string(),
            ..Default::default()
        };
        assert_eq!(knowledge.synonym_list(), vec!["a", "b", "c"]);
    }
}
