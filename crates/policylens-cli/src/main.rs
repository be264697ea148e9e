//! Interactive CLI for classifying IAM policies as Weak or Strong.

mod input;

use anyhow::Context;
use clap::Parser;
use policylens_ai::{AiConfig, PolicyClassifier};

/// Classify an IAM policy as Weak or Strong via a reasoning service with a
/// schema-constrained reply.
#[derive(Parser)]
#[command(name = "policylens", version)]
struct Args {
    /// Reasoning-service API key.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Model identifier to request.
    #[arg(long, default_value = AiConfig::DEFAULT_MODEL)]
    model: String,

    /// Base URL of the chat-completions endpoint.
    #[arg(long, default_value = AiConfig::DEFAULT_BASE_URL)]
    base_url: String,

    /// Classify this JSON file instead of running the interactive menu.
    #[arg(long)]
    file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = AiConfig {
        api_key: args.api_key,
        model: args.model,
        base_url: args.base_url,
    };

    let policy = match &args.file {
        Some(path) => input::load_file(path)?,
        None => match input::choose_source()? {
            Some(policy) => policy,
            // File selection chosen but no JSON files to offer.
            None => return Ok(()),
        },
    };

    tracing::info!(model = %config.model, "classifying policy");
    let classifier = PolicyClassifier::new(&config);
    let result = classifier
        .classify(policy)
        .await
        .context("classification failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
