// Logical relation commands

use crate::output::{or_dash, print_table_header, print_table_row, OutputFormat};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dataagent_client::contracts::{LogicalRelation, LogicalRelationRequest, RelationType};
use dataagent_client::HttpClient;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum RelationsCommand {
    /// List logical relations of a datasource
    List {
        /// Datasource ID
        #[arg(long, short)]
        datasource: i64,

        /// Include soft-deleted relations
        #[arg(long)]
        all: bool,
    },

    /// Add a logical relation
    Add {
        /// Datasource ID
        #[arg(long, short)]
        datasource: i64,

        #[command(flatten)]
        relation: RelationArgs,
    },

    /// Update a logical relation
    Update {
        /// Datasource ID
        #[arg(long, short)]
        datasource: i64,

        /// Relation ID
        id: i64,

        #[command(flatten)]
        relation: RelationArgs,
    },

    /// Delete a logical relation
    Delete {
        /// Datasource ID
        #[arg(long, short)]
        datasource: i64,

        /// Relation ID
        id: i64,
    },

    /// Replace every relation of a datasource from a JSON or YAML file
    Save {
        /// Datasource ID
        #[arg(long, short)]
        datasource: i64,

        /// File holding a list of relations
        #[arg(long, short)]
        file: PathBuf,
    },

    /// List column names of a table
    Columns {
        /// Datasource ID
        #[arg(long, short)]
        datasource: i64,

        /// Table name
        table: String,
    },
}

#[derive(Args)]
pub struct RelationArgs {
    /// Source table
    #[arg(long)]
    source_table: String,

    /// Source column
    #[arg(long)]
    source_column: String,

    /// Target table
    #[arg(long)]
    target_table: String,

    /// Target column
    #[arg(long)]
    target_column: String,

    /// Cardinality (1:1, 1:N, N:1)
    #[arg(long = "type")]
    relation_type: Option<RelationType>,

    /// Description
    #[arg(long)]
    description: Option<String>,
}

impl From<RelationArgs> for LogicalRelationRequest {
    fn from(args: RelationArgs) -> Self {
        LogicalRelationRequest {
            relation_type: args.relation_type,
            description: args.description,
            ..LogicalRelationRequest::new(
                args.source_table,
                args.source_column,
                args.target_table,
                args.target_column,
            )
        }
    }
}

pub async fn run(
    command: RelationsCommand,
    client: &HttpClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let service = client.logical_relations();

    match command {
        RelationsCommand::List { datasource, all } => {
            let relations: Vec<LogicalRelation> = service
                .get_logical_relations(datasource)
                .await
                .into_iter()
                .filter(|r| all || !r.is_deleted())
                .collect();

            if output.is_text() {
                print_relations(&relations);
            } else {
                output.print_value(&relations)?;
            }
        }
        RelationsCommand::Add {
            datasource,
            relation,
        } => {
            let request = LogicalRelationRequest::from(relation);
            let created = service
                .add_logical_relation(datasource, &request)
                .await?
                .context("Backend did not return the created relation")?;

            if output.is_text() {
                if quiet {
                    println!("{}", created.id.unwrap_or_default());
                } else {
                    println!("Added relation: {}", created.display_path());
                }
            } else {
                output.print_value(&created)?;
            }
        }
        RelationsCommand::Update {
            datasource,
            id,
            relation,
        } => {
            let request = LogicalRelationRequest::from(relation);
            let response = service
                .update_logical_relation(datasource, id, &request)
                .await?;
            if !response.success {
                anyhow::bail!(
                    "Failed to update relation {}: {}",
                    id,
                    response.message.as_deref().unwrap_or("unknown error")
                );
            }

            if output.is_text() {
                if !quiet {
                    println!("Updated relation: {}", id);
                }
            } else {
                output.print_value(&response)?;
            }
        }
        RelationsCommand::Delete { datasource, id } => {
            let response = service.delete_logical_relation(datasource, id).await?;
            if !response.success {
                anyhow::bail!(
                    "Failed to delete relation {}: {}",
                    id,
                    response.message.as_deref().unwrap_or("unknown error")
                );
            }

            if output.is_text() {
                if !quiet {
                    println!("Deleted relation: {}", id);
                }
            } else {
                output.print_value(&response)?;
            }
        }
        RelationsCommand::Save { datasource, file } => {
            let relations = read_relations(&file)?;
            let response = service
                .save_logical_relations(datasource, &relations)
                .await?;
            if !response.success {
                anyhow::bail!(
                    "Failed to save relations: {}",
                    response.message.as_deref().unwrap_or("unknown error")
                );
            }

            if output.is_text() {
                if !quiet {
                    println!(
                        "Saved {} relations for datasource {}",
                        relations.len(),
                        datasource
                    );
                }
            } else {
                output.print_value(&response)?;
            }
        }
        RelationsCommand::Columns { datasource, table } => {
            let columns = service.get_table_columns(datasource, &table).await;

            if output.is_text() {
                if columns.is_empty() && !quiet {
                    println!("No columns found for table {}", table);
                }
                for column in &columns {
                    println!("{}", column);
                }
            } else {
                output.print_value(&columns)?;
            }
        }
    }

    Ok(())
}

/// Parse a relation list from JSON, or YAML for `.yaml`/`.yml` files
fn read_relations(path: &PathBuf) -> Result<Vec<LogicalRelationRequest>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let relations = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid relation YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid relation JSON in {}", path.display()))?
    };
    Ok(relations)
}

fn print_relations(relations: &[LogicalRelation]) {
    if relations.is_empty() {
        println!("No relations found");
        return;
    }

    print_table_header(&[("ID", 8), ("RELATION", 48), ("TYPE", 4), ("DESCRIPTION", 30)]);
    for relation in relations {
        let id = relation.id.map(|id| id.to_string()).unwrap_or_default();
        let relation_type = relation
            .relation_type
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        print_table_row(&[
            (&id, 8),
            (&relation.display_path(), 48),
            (&relation_type, 4),
            (or_dash(relation.description.as_deref()), 30),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_relations_yaml() {
        let dir = std::env::temp_dir().join(format!("dataagent-relations-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("relations.yaml");
        std::fs::write(
            &path,
            "- sourceTableName: orders\n  sourceColumnName: customer_id\n  targetTableName: customers\n  targetColumnName: id\n  relationType: \"N:1\"\n",
        )
        .unwrap();

        let relations = read_relations(&path).unwrap();
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].target_table_name, "customers");
        assert_eq!(relations[0].relation_type, Some(RelationType::ManyToOne));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_relations_missing_file() {
        let err = read_relations(&PathBuf::from("/nonexistent/relations.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
