// Preset question service (/api/agent/{id}/preset-questions)

use crate::client::HttpClient;
use crate::error::Result;
use dataagent_contracts::{PresetQuestion, PresetQuestionInput, PresetQuestionPayload};
use reqwest::StatusCode;

const API_BASE_URL: &str = "/api/agent";

/// Suggested questions of an agent
pub struct PresetQuestionService<'a> {
    client: &'a HttpClient,
}

impl<'a> PresetQuestionService<'a> {
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, agent_id: i64) -> Result<Vec<PresetQuestion>> {
        self.client
            .get(&format!("{}/{}/preset-questions", API_BASE_URL, agent_id))
            .await
    }

    /// Replace the agent's questions; questions without `is_active` are saved as active
    ///
    /// Returns `true` only for 200 and 201.
    pub async fn batch_save(&self, agent_id: i64, questions: &[PresetQuestionInput]) -> Result<bool> {
        let payload: Vec<PresetQuestionPayload> =
            questions.iter().map(PresetQuestionPayload::from).collect();
        let status = self
            .client
            .post_for_status(
                &format!("{}/{}/preset-questions", API_BASE_URL, agent_id),
                &payload,
            )
            .await?;
        Ok(status == StatusCode::OK || status == StatusCode::CREATED)
    }

    pub async fn delete(&self, agent_id: i64, question_id: i64) -> Result<bool> {
        self.client
            .delete_unit(&format!(
                "{}/{}/preset-questions/{}",
                API_BASE_URL, agent_id, question_id
            ))
            .await?;
        Ok(true)
    }
}
