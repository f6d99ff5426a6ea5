// Business knowledge service (/api/business-knowledge)

use crate::client::HttpClient;
use crate::error::{ClientError, Result};
use dataagent_contracts::{
    ApiResponse, BusinessKnowledge, CreateBusinessKnowledgeRequest, UpdateBusinessKnowledgeRequest,
};

const API_BASE_URL: &str = "/api/business-knowledge";

/// Business terminology entries of an agent
pub struct BusinessKnowledgeService<'a> {
    client: &'a HttpClient,
}

impl<'a> BusinessKnowledgeService<'a> {
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Entries of an agent, optionally filtered by keyword
    pub async fn list(&self, agent_id: i64, keyword: Option<&str>) -> Result<Vec<BusinessKnowledge>> {
        let mut params = vec![("agentId", agent_id.to_string())];
        if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
            params.push(("keyword", keyword.to_string()));
        }

        let response: ApiResponse<Vec<BusinessKnowledge>> =
            self.client.get_with_query(API_BASE_URL, &params).await?;
        Ok(response.into_data_or_default())
    }

    /// `None` when the entry does not exist
    pub async fn get(&self, id: i64) -> Result<Option<BusinessKnowledge>> {
        let result: Result<ApiResponse<BusinessKnowledge>> =
            self.client.get(&format!("{}/{}", API_BASE_URL, id)).await;
        match result {
            Ok(response) => Ok(response.data),
            Err(ClientError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create(
        &self,
        knowledge: &CreateBusinessKnowledgeRequest,
    ) -> Result<BusinessKnowledge> {
        let response: ApiResponse<BusinessKnowledge> =
            self.client.post(API_BASE_URL, knowledge).await?;
        response.data.ok_or(ClientError::MissingData)
    }

    /// `None` when the entry does not exist
    pub async fn update(
        &self,
        id: i64,
        knowledge: &UpdateBusinessKnowledgeRequest,
    ) -> Result<Option<BusinessKnowledge>> {
        let result: Result<ApiResponse<BusinessKnowledge>> = self
            .client
            .put(&format!("{}/{}", API_BASE_URL, id), knowledge)
            .await;
        match result {
            Ok(response) => Ok(response.data),
            Err(ClientError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// `false` when the entry does not exist
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result: Result<ApiResponse> =
            self.client.delete(&format!("{}/{}", API_BASE_URL, id)).await;
        match result {
            Ok(response) => Ok(response.success),
            Err(ClientError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn recall_knowledge(&self, id: i64, is_recall: bool) -> Result<bool> {
        let response: ApiResponse = self
            .client
            .post_with_query(
                &format!("{}/recall/{}", API_BASE_URL, id),
                &[("isRecall", is_recall)],
            )
            .await?;
        Ok(response.success)
    }

    pub async fn retry_embedding(&self, id: i64) -> Result<bool> {
        let response: ApiResponse = self
            .client
            .post_empty(&format!("{}/retry-embedding/{}", API_BASE_URL, id))
            .await?;
        Ok(response.success)
    }

    /// Re-embed every entry of the agent into the vector store
    pub async fn refresh_all_knowledge_to_vector_store(&self, agent_id: i64) -> Result<bool> {
        let response: ApiResponse = self
            .client
            .post_with_query(
                &format!("{}/refresh-vector-store", API_BASE_URL),
                &[("agentId", agent_id)],
            )
            .await?;
        Ok(response.success)
    }
}
