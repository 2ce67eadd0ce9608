//! Clientele - customer data-access gateway
//!
//! Usage:
//!   clientele list                    - List every customer
//!   clientele get <id>                - Show one customer
//!   clientele create <name>           - Create a customer
//!   clientele update <id> <name>      - Rename a customer
//!   clientele delete <id>             - Delete a customer
//!
//! Global flags pick the config file and the backend; each can also be set
//! through its CLIENTELE_* environment variable.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clientele_app::CustomerCommand;
use shared::{AppConfig, StoreBackend};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "clientele")]
#[command(about = "Clientele - customer data-access gateway")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: CustomerCommand,

    /// JSON configuration file
    #[arg(short, long, global = true, env = "CLIENTELE_CONFIG")]
    config: Option<PathBuf>,

    /// Persistence backend (memory or sqlite)
    #[arg(short, long, global = true, env = "CLIENTELE_BACKEND")]
    backend: Option<StoreBackend>,

    /// sqlx database URL for the sqlite backend
    #[arg(long, global = true, env = "CLIENTELE_DATABASE_URL")]
    database_url: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, env = "CLIENTELE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(
        cli.backend,
        cli.database_url,
        cli.log_level,
    );

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = clientele_app::run(&config, &cli.command).await?;

    let rendered = output.render(cli.json)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }

    Ok(ExitCode::from(clientele_app::exit_status(&output)))
}
