// Common DTOs shared by every resource

use serde::{Deserialize, Deserializer, Serialize};

/// Response envelope used by most management endpoints
///
/// `data` is absent on many write endpoints, and list endpoints may omit it
/// when nothing matches. The type parameter defaults to a raw JSON value for
/// endpoints whose payload carries no meaning for the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T = serde_json::Value> {
    #[serde(default, deserialize_with = "null_to_default")]
    pub success: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_num: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Take `data`, falling back to the type's default when absent
    pub fn into_data_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of results from a paginated query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    #[serde(default, deserialize_with = "null_to_default")]
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub page_num: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub page_size: i64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub total_pages: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> PageResult<T> {
    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.page_num < self.total_pages
    }
}

/// Vectorization state of a knowledge entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmbeddingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl std::fmt::Display for EmbeddingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbeddingStatus::Pending => write!(f, "PENDING"),
            EmbeddingStatus::Processing => write!(f, "PROCESSING"),
            EmbeddingStatus::Completed => write!(f, "COMPLETED"),
            EmbeddingStatus::Failed => write!(f, "FAILED"),
        }
    }
}

impl std::str::FromStr for EmbeddingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(EmbeddingStatus::Pending),
            "PROCESSING" => Ok(EmbeddingStatus::Processing),
            "COMPLETED" => Ok(EmbeddingStatus::Completed),
            "FAILED" => Ok(EmbeddingStatus::Failed),
            _ => Err(format!("Unknown embedding status: {}", s)),
        }
    }
}
