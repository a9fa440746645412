//! doc-loader: print the text and metadata extracted from a file

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use doc_loader::cli::{Cli, Commands, ConfigAction, OutputFormat};
use doc_loader::{Config, DocumentLoader, FileType};
use log::{error, info};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli, config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(cli: Cli, config: Config) -> anyhow::Result<()> {
    match cli.command {
        Commands::Load { path, format } => {
            let loader = DocumentLoader::from_config(&config);
            let record = loader
                .resolve_async(path.clone())
                .await
                .with_context(|| format!("Failed to load {}", path.display()))?;

            info!("Loaded {} characters from {}", record.text().len(), record.source());

            match format {
                OutputFormat::Json => {
                    println!("{}", record.to_json_pretty()?);
                }
                OutputFormat::Text => {
                    println!("{}", record.text());
                }
            }
        }

        Commands::Formats => {
            let loader = DocumentLoader::from_config(&config);
            for file_type in FileType::ALL {
                let status = if loader.supports(file_type) {
                    "available".green()
                } else {
                    "missing".red()
                };
                println!(".{:<5} {:<12} {}", file_type.extension(), file_type.to_string(), status);
            }
            for capability in loader.missing_capabilities() {
                println!("  {} {}: {}", "hint".yellow(), capability, capability.hint());
            }
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let path = cli.config.unwrap_or_else(Config::config_path);
                println!("# {}", path.display());
                print!("{}", config.to_toml()?);
            }
            ConfigAction::Reset => {
                let path = cli.config.unwrap_or_else(Config::config_path);
                Config::default().save_to(&path)?;
                println!("{} {}", "Configuration reset:".green(), path.display());
            }
        },
    }

    Ok(())
}
