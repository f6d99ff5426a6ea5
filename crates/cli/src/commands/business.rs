// Business knowledge (terminology) commands

use crate::output::{or_dash, print_field, print_table_header, print_table_row, yes_no, OutputFormat};
use anyhow::{Context, Result};
use clap::{ArgAction, Subcommand};
use dataagent_client::contracts::{
    BusinessKnowledge, CreateBusinessKnowledgeRequest, UpdateBusinessKnowledgeRequest,
};
use dataagent_client::HttpClient;

#[derive(Subcommand)]
pub enum BusinessCommand {
    /// List business terms of an agent
    List {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,

        /// Keyword filter
        #[arg(long, short)]
        keyword: Option<String>,
    },

    /// Get a business term by ID
    Get {
        /// Business knowledge ID
        id: i64,
    },

    /// Create a business term
    Create {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,

        /// Term
        #[arg(long)]
        term: String,

        /// Description
        #[arg(long, short)]
        description: String,

        /// Comma-separated synonyms
        #[arg(long, default_value = "")]
        synonyms: String,

        /// Exclude the term from recall
        #[arg(long)]
        no_recall: bool,
    },

    /// Update a business term
    Update {
        /// Business knowledge ID
        id: i64,

        /// New term
        #[arg(long)]
        term: Option<String>,

        /// New description
        #[arg(long, short)]
        description: Option<String>,

        /// New comma-separated synonyms
        #[arg(long)]
        synonyms: Option<String>,
    },

    /// Delete a business term
    Delete {
        /// Business knowledge ID
        id: i64,
    },

    /// Enable or disable recall for a business term
    Recall {
        /// Business knowledge ID
        id: i64,

        /// true/false, yes/no, on/off
        #[arg(action = ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
        enabled: bool,
    },

    /// Retry embedding of a business term
    RetryEmbedding {
        /// Business knowledge ID
        id: i64,
    },

    /// Re-embed every business term of an agent
    Refresh {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,
    },
}

pub async fn run(
    command: BusinessCommand,
    client: &HttpClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let service = client.business_knowledge();

    match command {
        BusinessCommand::List { agent, keyword } => {
            let items = service.list(agent, keyword.as_deref()).await?;

            if output.is_text() {
                if items.is_empty() {
                    println!("No business terms found");
                    return Ok(());
                }

                print_table_header(&[("ID", 8), ("TERM", 20), ("SYNONYMS", 30), ("RECALL", 6)]);
                for item in &items {
                    let id = item.id.map(|id| id.to_string()).unwrap_or_default();
                    print_table_row(&[
                        (&id, 8),
                        (&item.business_term, 20),
                        (or_dash(Some(item.synonyms.as_str())), 30),
                        (yes_no(item.is_recall), 6),
                    ]);
                }
            } else {
                output.print_value(&items)?;
            }
        }
        BusinessCommand::Get { id } => {
            let item = service
                .get(id)
                .await?
                .with_context(|| format!("Business term not found: {}", id))?;

            if output.is_text() {
                print_business_knowledge(&item);
            } else {
                output.print_value(&item)?;
            }
        }
        BusinessCommand::Create {
            agent,
            term,
            description,
            synonyms,
            no_recall,
        } => {
            let request = CreateBusinessKnowledgeRequest {
                business_term: term,
                description,
                synonyms,
                is_recall: !no_recall,
                agent_id: agent,
            };
            let created = service.create(&request).await?;

            if output.is_text() {
                let id = created.id.unwrap_or_default();
                if quiet {
                    println!("{}", id);
                } else {
                    println!("Created business term: {} ({})", created.business_term, id);
                }
            } else {
                output.print_value(&created)?;
            }
        }
        BusinessCommand::Update {
            id,
            term,
            description,
            synonyms,
        } => {
            // The backend replaces every field, so start from the stored entry
            let current = service
                .get(id)
                .await?
                .with_context(|| format!("Business term not found: {}", id))?;
            let mut request = UpdateBusinessKnowledgeRequest::from(&current);
            if let Some(term) = term {
                request.business_term = term;
            }
            if let Some(description) = description {
                request.description = description;
            }
            if let Some(synonyms) = synonyms {
                request.synonyms = synonyms;
            }

            let updated = service
                .update(id, &request)
                .await?
                .with_context(|| format!("Business term not found: {}", id))?;

            if output.is_text() {
                if !quiet {
                    println!("Updated business term: {}", id);
                }
            } else {
                output.print_value(&updated)?;
            }
        }
        BusinessCommand::Delete { id } => {
            if !service.delete(id).await? {
                anyhow::bail!("Failed to delete business term {}", id);
            }
            report(output, quiet, "Deleted business term", id)?;
        }
        BusinessCommand::Recall { id, enabled } => {
            if !service.recall_knowledge(id, enabled).await? {
                anyhow::bail!("Failed to update recall status of business term {}", id);
            }
            report(output, quiet, "Updated recall status of business term", id)?;
        }
        BusinessCommand::RetryEmbedding { id } => {
            if !service.retry_embedding(id).await? {
                anyhow::bail!("Failed to retry embedding of business term {}", id);
            }
            report(output, quiet, "Embedding queued for business term", id)?;
        }
        BusinessCommand::Refresh { agent } => {
            if !service.refresh_all_knowledge_to_vector_store(agent).await? {
                anyhow::bail!("Failed to refresh vector store for agent {}", agent);
            }
            report(output, quiet, "Refreshed vector store for agent", agent)?;
        }
    }

    Ok(())
}

fn report(output: OutputFormat, quiet: bool, action: &str, id: i64) -> Result<()> {
    if output.is_text() {
        if !quiet {
            println!("{}: {}", action, id);
        }
        Ok(())
    } else {
        output.print_value(&serde_json::json!({ "id": id, "success": true }))
    }
}

fn print_business_knowledge(item: &BusinessKnowledge) {
    print_field("ID", &item.id.map(|id| id.to_string()).unwrap_or_default());
    print_field("Agent", &item.agent_id.to_string());
    print_field("Term", &item.business_term);
    print_field("Description", &item.description);
    print_field("Synonyms", &item.synonym_list().join(", "));
    print_field("Recall", yes_no(item.is_recall));
    if let Some(status) = item.embedding_status {
        print_field("Status", &status.to_string());
    }
    if let Some(error) = &item.error_msg {
        print_field("Error", error);
    }
    print_field("Created", or_dash(item.created_time.as_deref()));
}
