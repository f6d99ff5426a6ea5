// Agent knowledge service (/api/agent-knowledge)

use crate::client::HttpClient;
use crate::error::{ClientError, Result};
use dataagent_contracts::{
    AgentKnowledge, AgentKnowledgeQuery, ApiResponse, EmbeddingStatus, KnowledgeStatistics,
    KnowledgeType, PageResult,
};
use tracing::warn;

const API_BASE_URL: &str = "/api/agent-knowledge";

/// Knowledge items attached to an agent
pub struct AgentKnowledgeService<'a> {
    client: &'a HttpClient,
}

impl<'a> AgentKnowledgeService<'a> {
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Paginated query with optional title, type and embedding-status filters
    pub async fn query_by_page(
        &self,
        query: &AgentKnowledgeQuery,
    ) -> Result<PageResult<AgentKnowledge>> {
        self.client
            .post(&format!("{}/query/page", API_BASE_URL), query)
            .await
    }

    /// All knowledge of an agent; only the filters given are sent
    pub async fn list_by_agent_id(
        &self,
        agent_id: i64,
        knowledge_type: Option<KnowledgeType>,
        status: Option<EmbeddingStatus>,
        keyword: Option<&str>,
    ) -> Result<Vec<AgentKnowledge>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(knowledge_type) = knowledge_type {
            params.push(("type", knowledge_type.to_string()));
        }
        if let Some(status) = status {
            params.push(("status", status.to_string()));
        }
        if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
            params.push(("keyword", keyword.to_string()));
        }

        let response: ApiResponse<Vec<AgentKnowledge>> = self
            .client
            .get_with_query(&format!("{}/agent/{}", API_BASE_URL, agent_id), &params)
            .await?;
        Ok(response.into_data_or_default())
    }

    /// `None` when the item does not exist
    pub async fn get_by_id(&self, id: i64) -> Result<Option<AgentKnowledge>> {
        let result: Result<ApiResponse<AgentKnowledge>> =
            self.client.get(&format!("{}/{}", API_BASE_URL, id)).await;
        match result {
            Ok(response) => Ok(response.data),
            Err(ClientError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create(&self, knowledge: &AgentKnowledge) -> Result<AgentKnowledge> {
        let response: ApiResponse<AgentKnowledge> = self
            .client
            .post(&format!("{}/create", API_BASE_URL), knowledge)
            .await?;
        response.data.ok_or(ClientError::MissingData)
    }

    /// `None` when the item does not exist
    pub async fn update(&self, id: i64, knowledge: &AgentKnowledge) -> Result<Option<AgentKnowledge>> {
        let result: Result<ApiResponse<AgentKnowledge>> = self
            .client
            .put(&format!("{}/{}", API_BASE_URL, id), knowledge)
            .await;
        match result {
            Ok(response) => Ok(response.data),
            Err(ClientError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Toggle whether the item takes part in recall
    ///
    /// Any failure is logged and reported as `None`.
    pub async fn update_recall_status(&self, id: i64, recalled: bool) -> Option<AgentKnowledge> {
        let result: Result<ApiResponse<AgentKnowledge>> = self
            .client
            .put_with_query(
                &format!("{}/recall/{}", API_BASE_URL, id),
                &[("isRecall", recalled)],
            )
            .await;
        match result {
            Ok(response) => response.data,
            Err(e) => {
                warn!(knowledge_id = id, error = %e, "Failed to update recall status");
                None
            }
        }
    }

    /// `false` when the item does not exist
    pub async fn delete(&self, id: i64) -> Result<bool> {
        match self
            .client
            .delete_unit(&format!("{}/{}", API_BASE_URL, id))
            .await
        {
            Ok(()) => Ok(true),
            Err(ClientError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Queue the item for embedding again; any failure is reported as `false`
    pub async fn retry_embedding(&self, id: i64) -> bool {
        let result: Result<ApiResponse> = self
            .client
            .post_empty(&format!("{}/retry-embedding/{}", API_BASE_URL, id))
            .await;
        match result {
            Ok(response) => response.success,
            Err(e) => {
                warn!(knowledge_id = id, error = %e, "Failed to retry embedding");
                false
            }
        }
    }

    pub async fn get_statistics(&self, agent_id: i64) -> Result<KnowledgeStatistics> {
        let response: ApiResponse<KnowledgeStatistics> = self
            .client
            .get(&format!("{}/statistics/{}", API_BASE_URL, agent_id))
            .await?;
        response.data.ok_or(ClientError::MissingData)
    }
}
