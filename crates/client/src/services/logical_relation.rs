// Logical relation service (/api/datasource/{id}/logical-relations)

use crate::client::{segment, HttpClient};
use crate::error::Result;
use dataagent_contracts::{ApiResponse, LogicalRelation, LogicalRelationRequest};
use tracing::warn;

const API_BASE_URL: &str = "/api/datasource";

/// Declared relations between the tables of a datasource
pub struct LogicalRelationService<'a> {
    client: &'a HttpClient,
}

impl<'a> LogicalRelationService<'a> {
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    fn relations_path(datasource_id: i64) -> String {
        format!("{}/{}/logical-relations", API_BASE_URL, datasource_id)
    }

    /// Relations of a datasource; any failure is logged and yields an empty list
    pub async fn get_logical_relations(&self, datasource_id: i64) -> Vec<LogicalRelation> {
        let result: Result<ApiResponse<Vec<LogicalRelation>>> =
            self.client.get(&Self::relations_path(datasource_id)).await;
        match result {
            Ok(response) => response.into_data_or_default(),
            Err(e) => {
                warn!(datasource_id, error = %e, "Failed to get logical relations");
                Vec::new()
            }
        }
    }

    pub async fn add_logical_relation(
        &self,
        datasource_id: i64,
        relation: &LogicalRelationRequest,
    ) -> Result<Option<LogicalRelation>> {
        let response: ApiResponse<LogicalRelation> = self
            .client
            .post(&Self::relations_path(datasource_id), relation)
            .await?;
        Ok(response.data)
    }

    pub async fn update_logical_relation(
        &self,
        datasource_id: i64,
        relation_id: i64,
        relation: &LogicalRelationRequest,
    ) -> Result<ApiResponse<LogicalRelation>> {
        self.client
            .put(
                &format!("{}/{}", Self::relations_path(datasource_id), relation_id),
                relation,
            )
            .await
    }

    pub async fn delete_logical_relation(
        &self,
        datasource_id: i64,
        relation_id: i64,
    ) -> Result<ApiResponse> {
        self.client
            .delete(&format!(
                "{}/{}",
                Self::relations_path(datasource_id),
                relation_id
            ))
            .await
    }

    /// Replace every relation of the datasource with `relations`
    pub async fn save_logical_relations(
        &self,
        datasource_id: i64,
        relations: &[LogicalRelationRequest],
    ) -> Result<ApiResponse<Vec<LogicalRelation>>> {
        self.client
            .put(&Self::relations_path(datasource_id), relations)
            .await
    }

    /// Column names of a table; any failure, including an unsuccessful
    /// envelope, is logged and yields an empty list
    pub async fn get_table_columns(&self, datasource_id: i64, table_name: &str) -> Vec<String> {
        let result: Result<ApiResponse<Vec<String>>> = self
            .client
            .get(&format!(
                "{}/{}/tables/{}/columns",
                API_BASE_URL,
                datasource_id,
                segment(table_name)
            ))
            .await;
        match result {
            Ok(response) if response.success => response.into_data_or_default(),
            Ok(response) => {
                warn!(
                    datasource_id,
                    table = %table_name,
                    message = response.message.as_deref().unwrap_or_default(),
                    "Failed to get table columns"
                );
                Vec::new()
            }
            Err(e) => {
                warn!(datasource_id, table = %table_name, error = %e, "Failed to get table columns");
                Vec::new()
            }
        }
    }
}
