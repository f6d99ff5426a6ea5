// Data Agent CLI
//
// Design Decision: Use clap derive for ergonomic argument parsing.
// Design Decision: Support text/json/yaml output formats for scripting.
// Design Decision: Every command goes through dataagent-client; no raw HTTP here.

mod commands;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dataagent_client::{ClientConfig, HttpClient};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dataagent")]
#[command(about = "Data Agent CLI - Manage agent knowledge, sessions, and model configuration")]
#[command(version)]
pub struct Cli {
    /// API base URL
    #[arg(
        long,
        env = "DATAAGENT_API_URL",
        default_value = dataagent_client::config::DEFAULT_BASE_URL
    )]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "DATAAGENT_TIMEOUT_SECS", default_value_t = dataagent_client::config::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Output format
    #[arg(long, short, default_value = "text", value_parser = ["text", "json", "yaml"])]
    pub output: String,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage agent knowledge (documents, QA, FAQ)
    Knowledge {
        #[command(subcommand)]
        command: commands::knowledge::KnowledgeCommand,
    },

    /// Manage business terminology
    Business {
        #[command(subcommand)]
        command: commands::business::BusinessCommand,
    },

    /// Manage chat sessions and messages
    Sessions {
        #[command(subcommand)]
        command: commands::sessions::SessionsCommand,
    },

    /// Manage logical relations between datasource tables
    Relations {
        #[command(subcommand)]
        command: commands::relations::RelationsCommand,
    },

    /// Manage LLM provider configurations
    Models {
        #[command(subcommand)]
        command: commands::models::ModelsCommand,
    },

    /// Manage preset questions
    Presets {
        #[command(subcommand)]
        command: commands::presets::PresetsCommand,
    },

    /// Inspect the console route table
    Routes {
        #[command(subcommand)]
        command: commands::routes::RoutesCommand,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads env fallbacks
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dataagent=info,dataagent_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded .env from {:?}", path);
    }

    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.api_url).with_timeout(Duration::from_secs(cli.timeout));
    let client = HttpClient::new(&config).context("Failed to build HTTP client")?;
    let output_format = output::OutputFormat::from_str(&cli.output);

    match cli.command {
        Commands::Knowledge { command } => {
            commands::knowledge::run(command, &client, output_format, cli.quiet).await
        }
        Commands::Business { command } => {
            commands::business::run(command, &client, output_format, cli.quiet).await
        }
        Commands::Sessions { command } => {
            commands::sessions::run(command, &client, output_format, cli.quiet).await
        }
        Commands::Relations { command } => {
            commands::relations::run(command, &client, output_format, cli.quiet).await
        }
        Commands::Models { command } => {
            commands::models::run(command, &client, output_format, cli.quiet).await
        }
        Commands::Presets { command } => {
            commands::presets::run(command, &client, output_format, cli.quiet).await
        }
        Commands::Routes { command } => commands::routes::run(command, output_format),
    }
}
