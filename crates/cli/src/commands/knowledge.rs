// Agent knowledge commands

use crate::output::{or_dash, print_field, print_table_header, print_table_row, OutputFormat};
use anyhow::{Context, Result};
use clap::{ArgAction, Subcommand};
use dataagent_client::contracts::{
    AgentKnowledge, AgentKnowledgeQuery, EmbeddingStatus, KnowledgeType,
};
use dataagent_client::HttpClient;

#[derive(Subcommand)]
pub enum KnowledgeCommand {
    /// Query one page of an agent's knowledge
    Query {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,

        /// Title filter (fuzzy)
        #[arg(long)]
        title: Option<String>,

        /// Knowledge type (DOCUMENT, QA, FAQ)
        #[arg(long = "type")]
        knowledge_type: Option<KnowledgeType>,

        /// Embedding status (PENDING, PROCESSING, COMPLETED, FAILED)
        #[arg(long)]
        status: Option<EmbeddingStatus>,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: i64,

        /// Page size
        #[arg(long, default_value_t = 10)]
        size: i64,
    },

    /// List all knowledge of an agent
    List {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,

        /// Knowledge type (DOCUMENT, QA, FAQ)
        #[arg(long = "type")]
        knowledge_type: Option<KnowledgeType>,

        /// Embedding status
        #[arg(long)]
        status: Option<EmbeddingStatus>,

        /// Keyword filter
        #[arg(long, short)]
        keyword: Option<String>,
    },

    /// Get knowledge by ID
    Get {
        /// Knowledge ID
        id: i64,
    },

    /// Create a QA or FAQ knowledge item
    Create {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,

        /// Knowledge type (QA or FAQ)
        #[arg(long = "type", default_value = "QA")]
        knowledge_type: KnowledgeType,

        /// Title
        #[arg(long)]
        title: String,

        /// Question
        #[arg(long)]
        question: Option<String>,

        /// Answer content
        #[arg(long)]
        content: String,
    },

    /// Update title and content of a knowledge item
    Update {
        /// Knowledge ID
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,
    },

    /// Enable or disable recall for a knowledge item
    Recall {
        /// Knowledge ID
        id: i64,

        /// true/false, yes/no, on/off
        #[arg(action = ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
        enabled: bool,
    },

    /// Delete a knowledge item
    Delete {
        /// Knowledge ID
        id: i64,
    },

    /// Retry embedding of a knowledge item
    RetryEmbedding {
        /// Knowledge ID
        id: i64,
    },

    /// Show knowledge statistics of an agent
    Stats {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,
    },
}

pub async fn run(
    command: KnowledgeCommand,
    client: &HttpClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let service = client.agent_knowledge();

    match command {
        KnowledgeCommand::Query {
            agent,
            title,
            knowledge_type,
            status,
            page,
            size,
        } => {
            let mut query = AgentKnowledgeQuery::new(agent).with_page(page, size);
            if let Some(title) = title {
                query = query.with_title(title);
            }
            if let Some(knowledge_type) = knowledge_type {
                query = query.with_type(knowledge_type);
            }
            if let Some(status) = status {
                query = query.with_embedding_status(status);
            }
            let result = service.query_by_page(&query).await?;

            if output.is_text() {
                print_knowledge_table(&result.data);
                if !quiet {
                    println!(
                        "\nPage {}/{} ({} total)",
                        result.page_num, result.total_pages, result.total
                    );
                }
            } else {
                output.print_value(&result)?;
            }
        }
        KnowledgeCommand::List {
            agent,
            knowledge_type,
            status,
            keyword,
        } => {
            let items = service
                .list_by_agent_id(agent, knowledge_type, status, keyword.as_deref())
                .await?;

            if output.is_text() {
                print_knowledge_table(&items);
            } else {
                output.print_value(&items)?;
            }
        }
        KnowledgeCommand::Get { id } => {
            let knowledge = service
                .get_by_id(id)
                .await?
                .with_context(|| format!("Knowledge not found: {}", id))?;

            if output.is_text() {
                print_knowledge(&knowledge);
            } else {
                output.print_value(&knowledge)?;
            }
        }
        KnowledgeCommand::Create {
            agent,
            knowledge_type,
            title,
            question,
            content,
        } => {
            let mut knowledge = AgentKnowledge::new(agent, knowledge_type, title, content);
            if let Some(question) = question {
                knowledge = knowledge.with_question(question);
            }
            let created = service.create(&knowledge).await?;

            if output.is_text() {
                if quiet {
                    println!("{}", created.id.unwrap_or_default());
                } else {
                    println!("Created knowledge: {}", created.id.unwrap_or_default());
                    print_field("Status", &status_label(created.embedding_status));
                }
            } else {
                output.print_value(&created)?;
            }
        }
        KnowledgeCommand::Update { id, title, content } => {
            let update = AgentKnowledge {
                title,
                content,
                ..Default::default()
            };
            let updated = service
                .update(id, &update)
                .await?
                .with_context(|| format!("Knowledge not found: {}", id))?;

            if output.is_text() {
                if !quiet {
                    println!("Updated knowledge: {}", id);
                }
            } else {
                output.print_value(&updated)?;
            }
        }
        KnowledgeCommand::Recall { id, enabled } => {
            let updated = service
                .update_recall_status(id, enabled)
                .await
                .with_context(|| format!("Failed to update recall status of knowledge {}", id))?;

            if output.is_text() {
                if !quiet {
                    println!("Recall {} for knowledge: {}", on_off(enabled), id);
                }
            } else {
                output.print_value(&updated)?;
            }
        }
        KnowledgeCommand::Delete { id } => {
            if !service.delete(id).await? {
                anyhow::bail!("Knowledge not found: {}", id);
            }

            if output.is_text() {
                if !quiet {
                    println!("Deleted knowledge: {}", id);
                }
            } else {
                output.print_value(&serde_json::json!({ "id": id, "deleted": true }))?;
            }
        }
        KnowledgeCommand::RetryEmbedding { id } => {
            if !service.retry_embedding(id).await {
                anyhow::bail!("Failed to retry embedding of knowledge {}", id);
            }

            if output.is_text() && !quiet {
                println!("Embedding queued for knowledge: {}", id);
            } else if !output.is_text() {
                output.print_value(&serde_json::json!({ "id": id, "queued": true }))?;
            }
        }
        KnowledgeCommand::Stats { agent } => {
            let stats = service.get_statistics(agent).await?;

            if output.is_text() {
                print_field("Total", &stats.total_count.to_string());
                for (knowledge_type, count) in &stats.type_statistics {
                    print_field(knowledge_type, &count.to_string());
                }
            } else {
                output.print_value(&stats)?;
            }
        }
    }

    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

fn status_label(status: Option<EmbeddingStatus>) -> String {
    status.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_knowledge_table(items: &[AgentKnowledge]) {
    if items.is_empty() {
        println!("No knowledge found");
        return;
    }

    print_table_header(&[("ID", 8), ("TYPE", 9), ("TITLE", 30), ("RECALL", 6), ("STATUS", 11)]);

    for item in items {
        let id = item.id.map(|id| id.to_string()).unwrap_or_default();
        let knowledge_type = item
            .knowledge_type
            .map(|t| t.to_string())
            .unwrap_or_default();
        let recall = crate::output::yes_no(item.is_recall.unwrap_or(false));
        print_table_row(&[
            (&id, 8),
            (&knowledge_type, 9),
            (or_dash(item.title.as_deref()), 30),
            (recall, 6),
            (&status_label(item.embedding_status), 11),
        ]);
    }
}

fn print_knowledge(knowledge: &AgentKnowledge) {
    print_field(
        "ID",
        &knowledge.id.map(|id| id.to_string()).unwrap_or_default(),
    );
    print_field(
        "Agent",
        &knowledge.agent_id.map(|id| id.to_string()).unwrap_or_default(),
    );
    print_field("Title", or_dash(knowledge.title.as_deref()));
    if let Some(knowledge_type) = knowledge.knowledge_type {
        print_field("Type", &knowledge_type.to_string());
    }
    if let Some(question) = &knowledge.question {
        print_field("Question", question);
    }
    if let Some(content) = &knowledge.content {
        print_field("Content", content);
    }
    if let Some(filename) = &knowledge.source_filename {
        print_field("File", filename);
    }
    print_field(
        "Recall",
        crate::output::yes_no(knowledge.is_recall.unwrap_or(false)),
    );
    print_field("Status", &status_label(knowledge.embedding_status));
    if let Some(error) = &knowledge.error_msg {
        print_field("Error", error);
    }
    print_field("Created", or_dash(knowledge.created_time.as_deref()));
}
