// Model configuration commands

use crate::output::{print_table_header, print_table_row, yes_no, OutputFormat};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dataagent_client::contracts::{ApiResponse, ModelConfig, ModelType};
use dataagent_client::HttpClient;

#[derive(Subcommand)]
pub enum ModelsCommand {
    /// List model configurations (API keys masked)
    List,

    /// Add a model configuration
    Add {
        #[command(flatten)]
        config: ModelArgs,
    },

    /// Update a model configuration
    Update {
        /// Configuration ID
        id: i64,

        /// Provider name
        #[arg(long)]
        provider: Option<String>,

        /// API key
        #[arg(long, env = "DATAAGENT_MODEL_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Provider base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,

        /// Sampling temperature
        #[arg(long)]
        temperature: Option<f64>,

        /// Maximum output tokens
        #[arg(long)]
        max_tokens: Option<i32>,
    },

    /// Delete a model configuration
    Delete {
        /// Configuration ID
        id: i64,
    },

    /// Make a configuration the active one for its model type
    Activate {
        /// Configuration ID
        id: i64,
    },

    /// Test connectivity of a configuration without saving it
    Test {
        #[command(flatten)]
        config: ModelArgs,
    },
}

#[derive(Args)]
pub struct ModelArgs {
    /// Provider name (e.g. openai, dashscope, deepseek)
    #[arg(long)]
    provider: String,

    /// API key
    #[arg(long, env = "DATAAGENT_MODEL_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Provider base URL
    #[arg(long)]
    base_url: String,

    /// Model name
    #[arg(long)]
    model: String,

    /// Model type (CHAT, EMBEDDING)
    #[arg(long = "type", default_value = "CHAT")]
    model_type: ModelType,

    /// Sampling temperature
    #[arg(long)]
    temperature: Option<f64>,

    /// Maximum output tokens
    #[arg(long)]
    max_tokens: Option<i32>,

    /// Custom chat completions path
    #[arg(long)]
    completions_path: Option<String>,

    /// Custom embeddings path
    #[arg(long)]
    embeddings_path: Option<String>,
}

impl From<ModelArgs> for ModelConfig {
    fn from(args: ModelArgs) -> Self {
        let mut config = ModelConfig::new(
            args.provider,
            args.api_key,
            args.base_url,
            args.model,
            args.model_type,
        );
        config.temperature = args.temperature;
        config.max_tokens = args.max_tokens;
        config.completions_path = args.completions_path;
        config.embeddings_path = args.embeddings_path;
        config
    }
}

pub async fn run(
    command: ModelsCommand,
    client: &HttpClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let service = client.model_configs();

    match command {
        ModelsCommand::List => {
            let configs: Vec<ModelConfig> = service
                .list()
                .await?
                .into_iter()
                .map(|config| ModelConfig {
                    api_key: config.masked_api_key(),
                    ..config
                })
                .collect();

            if output.is_text() {
                print_configs(&configs);
            } else {
                output.print_value(&configs)?;
            }
        }
        ModelsCommand::Add { config } => {
            let config = ModelConfig::from(config);
            if !service.add(&config).await? {
                anyhow::bail!("Failed to add model configuration {}", config.model_name);
            }

            if output.is_text() {
                if !quiet {
                    println!("Added model configuration: {}", config.model_name);
                }
            } else {
                output.print_value(&serde_json::json!({ "success": true }))?;
            }
        }
        ModelsCommand::Update {
            id,
            provider,
            api_key,
            base_url,
            model,
            temperature,
            max_tokens,
        } => {
            // Updates replace the whole record
            let mut config = service
                .list()
                .await?
                .into_iter()
                .find(|config| config.id == Some(id))
                .with_context(|| format!("Model configuration not found: {}", id))?;
            if let Some(provider) = provider {
                config.provider = provider;
            }
            if let Some(api_key) = api_key {
                config.api_key = api_key;
            }
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }
            if let Some(model) = model {
                config.model_name = model;
            }
            if temperature.is_some() {
                config.temperature = temperature;
            }
            if max_tokens.is_some() {
                config.max_tokens = max_tokens;
            }

            if !service.update(&config).await? {
                anyhow::bail!("Failed to update model configuration {}", id);
            }

            if output.is_text() {
                if !quiet {
                    println!("Updated model configuration: {}", id);
                }
            } else {
                output.print_value(&serde_json::json!({ "id": id, "success": true }))?;
            }
        }
        ModelsCommand::Delete { id } => {
            let response = service.delete(id).await?;
            finish(output, quiet, &response, &format!("Deleted model configuration {}", id))?;
        }
        ModelsCommand::Activate { id } => {
            if !service.activate(id).await? {
                anyhow::bail!("Failed to activate model configuration {}", id);
            }

            if output.is_text() {
                if !quiet {
                    println!("Activated model configuration: {}", id);
                }
            } else {
                output.print_value(&serde_json::json!({ "id": id, "success": true }))?;
            }
        }
        ModelsCommand::Test { config } => {
            let config = ModelConfig::from(config);
            let response = service.test_connection(&config).await?;
            finish(
                output,
                quiet,
                &response,
                &format!("Connection to {} succeeded", config.model_name),
            )?;
        }
    }

    Ok(())
}

/// Report an envelope result; an unsuccessful envelope is an error
fn finish(
    output: OutputFormat,
    quiet: bool,
    response: &ApiResponse<String>,
    summary: &str,
) -> Result<()> {
    if !output.is_text() {
        output.print_value(response)?;
    }
    if !response.success {
        anyhow::bail!(
            "{}",
            response.message.as_deref().unwrap_or("Request was not successful")
        );
    }
    if output.is_text() && !quiet {
        match response.data.as_deref().or(response.message.as_deref()) {
            Some(detail) => println!("{}: {}", summary, detail),
            None => println!("{}", summary),
        }
    }
    Ok(())
}

fn print_configs(configs: &[ModelConfig]) {
    if configs.is_empty() {
        println!("No model configurations found");
        return;
    }

    print_table_header(&[
        ("ID", 6),
        ("TYPE", 9),
        ("PROVIDER", 12),
        ("MODEL", 24),
        ("ACTIVE", 6),
        ("API KEY", 16),
    ]);
    for config in configs {
        let id = config.id.map(|id| id.to_string()).unwrap_or_default();
        print_table_row(&[
            (&id, 6),
            (&config.model_type.to_string(), 9),
            (&config.provider, 12),
            (&config.model_name, 24),
            (yes_no(config.is_active()), 6),
            (&config.api_key, 16),
        ]);
    }
}
