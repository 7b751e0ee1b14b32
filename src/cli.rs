//! # Command Line Interface
//!
//! `latchkey serve` runs the broker. Flags override the `LATCHKEY_*` environment.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::api::start_api_server;
use crate::config::Config;
use crate::observability::{init_observability, log_config_info};
use crate::vault::Vault;
use crate::{APP_NAME, VERSION};

#[derive(Parser, Debug)]
#[command(name = "latchkey")]
#[command(about = "In-memory secret broker with AppRole authentication")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level override (e.g. debug, latchkey=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit JSON log lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP API server (default)
    Serve {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind to
        #[arg(short, long)]
        addr: Option<String>,
    },
}

impl Cli {
    /// Layer command-line overrides on top of environment configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.json_logs {
            config.observability.json_logging = true;
        }
        if let Some(Commands::Serve { port, addr }) = &self.command {
            if let Some(port) = port {
                config.api.port = *port;
            }
            if let Some(addr) = addr {
                config.api.bind_address = addr.clone();
            }
        }
        config
    }
}

/// Run CLI commands
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env file is fine; a malformed one is worth a warning.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    let config = cli.apply(Config::from_env()?);
    init_observability(&config.observability)?;

    tracing::info!(app_name = APP_NAME, version = VERSION, "Starting Latchkey secret broker");
    log_config_info(&config);

    let vault = Arc::new(Vault::new());
    start_api_server(&config.api, vault).await?;
    Ok(())
}
