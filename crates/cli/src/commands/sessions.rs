// Chat session commands

use crate::output::{or_dash, print_field, print_table_header, print_table_row, yes_no, OutputFormat};
use anyhow::Result;
use clap::{ArgAction, Subcommand};
use dataagent_client::contracts::{ApiResponse, ChatMessage, ChatSession, MessageType};
use dataagent_client::HttpClient;

#[derive(Subcommand)]
pub enum SessionsCommand {
    /// List sessions of an agent
    List {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,
    },

    /// Create a session
    Create {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,

        /// Session title
        #[arg(long, short)]
        title: Option<String>,

        /// Owning user ID
        #[arg(long)]
        user: Option<i64>,
    },

    /// Delete every session of an agent
    Clear {
        /// Agent ID
        #[arg(long, short)]
        agent: i64,
    },

    /// Show messages of a session
    Messages {
        /// Session ID
        session: String,
    },

    /// Save a message to a session
    Save {
        /// Session ID
        session: String,

        /// Message content
        content: String,

        /// Save as an assistant message instead of a user message
        #[arg(long)]
        assistant: bool,

        /// Message type (text, sql, result, error)
        #[arg(long = "type", default_value = "text")]
        message_type: MessageType,
    },

    /// Pin or unpin a session
    Pin {
        /// Session ID
        session: String,

        /// true/false, yes/no, on/off
        #[arg(action = ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
        pinned: bool,
    },

    /// Rename a session
    Rename {
        /// Session ID
        session: String,

        /// New title
        title: String,
    },

    /// Delete a session
    Delete {
        /// Session ID
        session: String,
    },
}

pub async fn run(
    command: SessionsCommand,
    client: &HttpClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let service = client.chat();

    match command {
        SessionsCommand::List { agent } => {
            let sessions = service.get_agent_sessions(agent).await?;

            if output.is_text() {
                print_sessions(&sessions);
            } else {
                output.print_value(&sessions)?;
            }
        }
        SessionsCommand::Create { agent, title, user } => {
            let session = service.create_session(agent, title.as_deref(), user).await?;

            if output.is_text() {
                if quiet {
                    println!("{}", session.id);
                } else {
                    println!("Created session: {}", session.id);
                    print_field("Title", &session.title);
                }
            } else {
                output.print_value(&session)?;
            }
        }
        SessionsCommand::Clear { agent } => {
            let response = service.clear_agent_sessions(agent).await?;
            report(output, quiet, &response, &format!("Cleared sessions of agent {}", agent))?;
        }
        SessionsCommand::Messages { session } => {
            let messages = service.get_session_messages(&session).await?;

            if output.is_text() {
                print_messages(&messages);
            } else {
                output.print_value(&messages)?;
            }
        }
        SessionsCommand::Save {
            session,
            content,
            assistant,
            message_type,
        } => {
            let message = if assistant {
                ChatMessage::assistant(content)
            } else {
                ChatMessage::user(content)
            }
            .with_type(message_type);
            let saved = service.save_message(&session, &message).await?;

            if output.is_text() {
                if !quiet {
                    let id = saved.id.map(|id| id.to_string()).unwrap_or_default();
                    println!("Saved message {} to session {}", id, session);
                }
            } else {
                output.print_value(&saved)?;
            }
        }
        SessionsCommand::Pin { session, pinned } => {
            let response = service.pin_session(&session, pinned).await?;
            let action = if pinned { "Pinned" } else { "Unpinned" };
            report(output, quiet, &response, &format!("{} session {}", action, session))?;
        }
        SessionsCommand::Rename { session, title } => {
            let response = service.rename_session(&session, &title).await?;
            report(output, quiet, &response, &format!("Renamed session {}", session))?;
        }
        SessionsCommand::Delete { session } => {
            let response = service.delete_session(&session).await?;
            report(output, quiet, &response, &format!("Deleted session {}", session))?;
        }
    }

    Ok(())
}

fn report(output: OutputFormat, quiet: bool, response: &ApiResponse, summary: &str) -> Result<()> {
    if !output.is_text() {
        return output.print_value(response);
    }
    if !quiet {
        match response.message.as_deref() {
            Some(message) => println!("{} ({})", summary, message),
            None => println!("{}", summary),
        }
    }
    Ok(())
}

fn print_sessions(sessions: &[ChatSession]) {
    if sessions.is_empty() {
        println!("No sessions found");
        return;
    }

    print_table_header(&[("ID", 36), ("TITLE", 24), ("STATUS", 8), ("PINNED", 6), ("UPDATED", 19)]);
    for session in sessions {
        print_table_row(&[
            (&session.id, 36),
            (&session.title, 24),
            (&session.status.to_string(), 8),
            (yes_no(session.is_pinned), 6),
            (or_dash(session.update_time.as_deref()), 19),
        ]);
    }
}

fn print_messages(messages: &[ChatMessage]) {
    if messages.is_empty() {
        println!("No messages");
        return;
    }

    for message in messages {
        let timestamp = or_dash(message.create_time.as_deref());
        match &message.message_type {
            MessageType::Text => println!("[{}] {}: {}", timestamp, message.role, message.content),
            other => println!(
                "[{}] {} ({}): {}",
                timestamp, message.role, other, message.content
            ),
        }
    }
}
