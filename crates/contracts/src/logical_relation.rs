// Logical relation DTOs
//
// A logical relation declares a foreign-key-like link between two datasource
// tables so the query planner can join them without a physical constraint.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Cardinality of a relation, as written by the console
///
/// The backend column is free text; values other than the three console
/// choices are kept verbatim so a single odd row does not hide the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationType {
    OneToOne,
    OneToMany,
    ManyToOne,
    Other(String),
}

impl RelationType {
    pub fn as_str(&self) -> &str {
        match self {
            RelationType::OneToOne => "1:1",
            RelationType::OneToMany => "1:N",
            RelationType::ManyToOne => "N:1",
            RelationType::Other(value) => value,
        }
    }

    fn known(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "1:1" => Some(RelationType::OneToOne),
            "1:N" => Some(RelationType::OneToMany),
            "N:1" => Some(RelationType::ManyToOne),
            _ => None,
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationType::known(s).ok_or_else(|| format!("Unknown relation type: {}", s))
    }
}

impl Serialize for RelationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RelationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(RelationType::known(&value).unwrap_or(RelationType::Other(value)))
    }
}

/// Stored relation between two tables of a datasource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalRelation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource_id: Option<i64>,
    pub source_table_name: String,
    pub source_column_name: String,
    pub target_table_name: String,
    pub target_column_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<RelationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 0 = live, 1 = soft-deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

impl LogicalRelation {
    pub fn is_deleted(&self) -> bool {
        self.is_deleted == Some(1)
    }

    /// `source.column -> target.column`
    pub fn display_path(&self) -> String {
        format!(
            "{}.{} -> {}.{}",
            self.source_table_name,
            self.source_column_name,
            self.target_table_name,
            self.target_column_name
        )
    }
}

/// Writable part of a relation; identity, owner and timestamps belong to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalRelationRequest {
    pub source_table_name: String,
    pub source_column_name: String,
    pub target_table_name: String,
    pub target_column_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<RelationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LogicalRelationRequest {
    pub fn new(
        source_table_name: impl Into<String>,
        source_column_name: impl Into<String>,
        target_table_name: impl Into<String>,
        target_column_name: impl Into<String>,
    ) -> Self {
        Self {
            source_table_name: source_table_name.into(),
            source_column_name: source_column_name.into(),
            target_table_name: target_table_name.into(),
            target_column_name: target_column_name.into(),
            relation_type: None,
            description: None,
        }
    }

    pub fn with_relation_type(mut self, relation_type: RelationType) -> Self {
        self.relation_type = Some(relation_type);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<&LogicalRelation> for LogicalRelationRequest {
    fn from(relation: &LogicalRelation) -> Self {
        Self {
            source_table_name: relation.source_table_name.clone(),
            source_column_name: relation.source_column_name.clone(),
            target_table_name: relation.target_table_name.clone(),
            target_column_name: relation.target_column_name.clone(),
            relation_type: relation.relation_type.clone(),
            description: relation.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relation_type_wire_format() {
        assert_eq!(
            serde_json::to_value(RelationType::ManyToOne).unwrap(),
            json!("N:1")
        );
        assert_eq!("1:n".parse::<RelationType>().unwrap(), RelationType::OneToMany);
        assert!("N:N".parse::<RelationType>().is_err());
    }

    #[test]
    fn test_unrecognized_relation_type_kept_verbatim() {
        let relation: LogicalRelation = serde_json::from_value(json!({
            "sourceTableName": "t_order",
            "sourceColumnName": "tag_id",
            "targetTableName": "t_tag",
            "targetColumnName": "id",
            "relationType": "N:N"
        }))
        .unwrap();
        assert_eq!(
            relation.relation_type,
            Some(RelationType::Other("N:N".to_string()))
        );

        let request = LogicalRelationRequest::from(&relation);
        assert_eq!(
            serde_json::to_value(&request).unwrap()["relationType"],
            json!("N:N")
        );
    }

    #[test]
    fn test_request_from_stored_relation() {
        let relation: LogicalRelation = serde_json::from_value(json!({
            "id": 4,
            "datasourceId": 1,
            "sourceTableName": "t_order",
            "sourceColumnName": "buyer_uid",
            "targetTableName": "t_user",
            "targetColumnName": "id",
            "relationType": "N:1",
            "isDeleted": 0
        }))
        .unwrap();
        assert!(!relation.is_deleted());
        assert_eq!(relation.display_path(), "t_order.buyer_uid -> t_user.id");

        let request = LogicalRelationRequest::from(&relation);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("datasourceId").is_none());
        assert_eq!(value["relationType"], json!("N:1"));
    }
}
