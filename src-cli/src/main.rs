//! Eros - CNPJ lookup and lead capture from the terminal.
//!
//! Thin shell over the library crates: parses arguments, loads the config,
//! installs logging and hands off to a command.

mod commands;
mod error;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eros_core::AppConfig;
use error::CommandError;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "eros")]
#[command(about = "Eros Distribuidora - CNPJ lookup and reseller lead capture")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Registry base URL (overrides config and EROS_REGISTRY_URL)
    #[arg(long, global = true, value_name = "URL")]
    registry_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a company by CNPJ and print its registry data
    Lookup {
        /// CNPJ, formatted or digits only
        cnpj: String,
    },

    /// Capture a reseller lead interactively
    Lead {
        /// Use the exit-popup form instead of the contact section
        #[arg(long)]
        popup: bool,
    },

    /// Print the page sections and navigation links
    Outline,

    /// Inspect or write configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Initialize tracing subscriber for logging.
fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(registry_url: Option<String>) -> Result<AppConfig> {
    let mut config = AppConfig::load_with_env().context("failed to load configuration")?;
    if let Some(url) = registry_url {
        config.registry.base_url = url;
        config.validate().context("invalid --registry-url")?;
    }
    Ok(config)
}

async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Lookup { cnpj } => commands::lookup::run(&config, &cnpj, json).await,
        Commands::Lead { popup } => commands::lead::run(&config, popup, json).await,
        Commands::Outline => commands::outline::run(json),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config, json),
            ConfigAction::Path => commands::config::path(json),
            ConfigAction::Init { force } => commands::config::init(&config, force, json),
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.registry_url.clone())?;

    init_tracing(&config.general.log_filter);
    info!("Starting Eros v{}", env!("CARGO_PKG_VERSION"));
    debug!(registry = %config.registry.base_url, "configuration loaded");

    let json = cli.json;
    let result = run(cli, config).await;

    if json {
        if let Err(err) = &result {
            if let Some(cmd_err) = err.downcast_ref::<CommandError>() {
                println!("{}", serde_json::to_string(cmd_err)?);
                std::process::exit(1);
            }
        }
    }
    result
}
