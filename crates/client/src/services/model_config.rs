// Model configuration service (/api/model-config)

use crate::client::HttpClient;
use crate::error::Result;
use dataagent_contracts::{ApiResponse, ModelConfig};
use tracing::debug;

const API_BASE_URL: &str = "/api/model-config";

/// LLM provider configurations
pub struct ModelConfigService<'a> {
    client: &'a HttpClient,
}

impl<'a> ModelConfigService<'a> {
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// All configurations; an envelope without `data` yields an empty list
    pub async fn list(&self) -> Result<Vec<ModelConfig>> {
        let response: ApiResponse<Vec<ModelConfig>> = self
            .client
            .get(&format!("{}/list", API_BASE_URL))
            .await?;
        Ok(response.into_data_or_default())
    }

    pub async fn add(&self, config: &ModelConfig) -> Result<bool> {
        debug!(provider = %config.provider, model = %config.model_name, "Adding model config");
        let response: ApiResponse<String> = self
            .client
            .post(&format!("{}/add", API_BASE_URL), config)
            .await?;
        Ok(response.success)
    }

    /// Update an existing configuration; `config.id` selects it
    pub async fn update(&self, config: &ModelConfig) -> Result<bool> {
        let response: ApiResponse<String> = self
            .client
            .put(&format!("{}/update", API_BASE_URL), config)
            .await?;
        Ok(response.success)
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse<String>> {
        self.client
            .delete(&format!("{}/{}", API_BASE_URL, id))
            .await
    }

    /// Make `id` the active configuration of its model type
    pub async fn activate(&self, id: i64) -> Result<bool> {
        let response: ApiResponse<String> = self
            .client
            .post_empty(&format!("{}/activate/{}", API_BASE_URL, id))
            .await?;
        Ok(response.success)
    }

    /// Ask the backend to call the provider with `config` without saving it
    pub async fn test_connection(&self, config: &ModelConfig) -> Result<ApiResponse<String>> {
        self.client
            .post(&format!("{}/test", API_BASE_URL), config)
            .await
    }
}
