mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tokcount_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // The TUI owns the terminal, so keep log noise down while it runs
    let default_filter = match cli.command {
        cli::Commands::Ui { .. } => "warn",
        _ => "info",
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config;

    match cli.command {
        cli::Commands::Count {
            text,
            file,
            model,
            tokens,
            json,
        } => {
            let config = load_config(config_path.as_deref())?;
            commands::count::handle(&config, text, file, model, tokens, json)
        }
        cli::Commands::Models => commands::models::handle(&load_config(config_path.as_deref())?),
        cli::Commands::Ui { model } => {
            commands::ui::handle(&load_config(config_path.as_deref())?, model)
        }
        cli::Commands::Web { port, host } => {
            let config = load_config(config_path.as_deref())?;
            commands::web::handle(&config, host, port).await
        }
        cli::Commands::Init { force } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            commands::init::handle(&path, force)
        }
        cli::Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

/// Explicit path must exist; the default location is created on first use
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
