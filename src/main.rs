//! Neuron Chat - terminal chat with a simulated assistant
//!
//! Main entry point for the Neuron Chat application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use neuron::cli::{Cli, Commands};
use neuron::commands;
use neuron::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat {
            resume,
            style,
            seed,
        } => {
            tracing::info!("Starting interactive chat session");
            if let Some(r) = &resume {
                tracing::debug!("Resuming conversation: {}", r);
            }
            if let Some(s) = &style {
                tracing::debug!("Using response style override: {}", s);
            }
            if seed.is_some() {
                tracing::debug!("Responder seed override supplied");
            }

            commands::chat::run_chat(config, resume, style, seed).await?;
            Ok(())
        }
        Commands::History { command } => {
            tracing::info!("Starting history command");
            commands::history::handle_history(&config, command)?;
            Ok(())
        }
        Commands::Settings { command } => {
            tracing::info!("Starting settings command");
            commands::settings::handle_settings(&config, command)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("neuron=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
