// Preset question commands

use crate::output::{print_table_header, print_table_row, yes_no, OutputFormat};
use anyhow::Result;
use clap::Subcommand;
use dataagent_client::contracts::{PresetQuestion, PresetQuestionInput};
use dataagent_client::HttpClient;

#[derive(Subcommand)]
pub enum PresetsCommand {
    /// List preset questions of an agent
    List {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,
    },

    /// Replace the preset questions of an agent
    Save {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,

        /// Active question, in display order (repeatable)
        #[arg(long = "question", short = 'q')]
        questions: Vec<String>,

        /// Inactive question (repeatable, saved after active ones)
        #[arg(long = "inactive")]
        inactive: Vec<String>,
    },

    /// Delete a preset question
    Delete {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,

        /// Question ID
        id: i64,
    },
}

pub async fn run(
    command: PresetsCommand,
    client: &HttpClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let service = client.preset_questions();

    match command {
        PresetsCommand::List { agent } => {
            let questions = service.list(agent).await?;

            if output.is_text() {
                print_questions(&questions);
            } else {
                output.print_value(&questions)?;
            }
        }
        PresetsCommand::Save {
            agent,
            questions,
            inactive,
        } => {
            let inputs: Vec<PresetQuestionInput> = questions
                .into_iter()
                .map(PresetQuestionInput::new)
                .chain(inactive.into_iter().map(PresetQuestionInput::inactive))
                .collect();

            if !service.batch_save(agent, &inputs).await? {
                anyhow::bail!("Failed to save preset questions for agent {}", agent);
            }

            if output.is_text() {
                if !quiet {
                    println!("Saved {} preset questions for agent {}", inputs.len(), agent);
                }
            } else {
                output.print_value(&inputs)?;
            }
        }
        PresetsCommand::Delete { agent, id } => {
            service.delete(agent, id).await?;

            if output.is_text() {
                if !quiet {
                    println!("Deleted preset question: {}", id);
                }
            } else {
                output.print_value(&serde_json::json!({ "id": id, "deleted": true }))?;
            }
        }
    }

    Ok(())
}

fn print_questions(questions: &[PresetQuestion]) {
    if questions.is_empty() {
        println!("No preset questions found");
        return;
    }

    print_table_header(&[("ID", 8), ("ORDER", 5), ("ACTIVE", 6), ("QUESTION", 50)]);
    for question in questions {
        let id = question.id.map(|id| id.to_string()).unwrap_or_default();
        let order = question
            .sort_order
            .map(|order| order.to_string())
            .unwrap_or_default();
        print_table_row(&[
            (&id, 8),
            (&order, 5),
            (yes_no(question.is_active.unwrap_or(true)), 6),
            (&question.question, 50),
        ]);
    }
}
