mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use credential_orchestrator::CredentialOrchestrator;
use credential_orchestrator::infra::storage::db;
use erp_bootstrap::config::to_yaml;
use erp_bootstrap::http::{finish_router, serve};
use erp_bootstrap::logging::init_logging;
use erp_bootstrap::signals::cancel_on_signal;
use erp_bootstrap::load_layered;
use mimalloc::MiMalloc;
use tokio_util::sync::CancellationToken;

use crate::config::{AppConfig, ENV_ALIASES};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Credential Orchestrator - tenant email to database/storage credentials
#[derive(Parser)]
#[command(name = "credential-orchestrator-server")]
#[command(about = "Credential Orchestrator - tenant email to database/storage credentials")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory `SQLite` credential store
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        match self.verbose {
            0 => {}
            1 => "info".clone_into(&mut config.logging.level),
            2 => "debug".clone_into(&mut config.logging.level),
            _ => "trace".clone_into(&mut config.logging.level),
        }
        if self.mock {
            "sqlite::memory:".clone_into(&mut config.database.dsn);
            config.database.max_connections = 1;
            config.database.run_migrations = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) defaults -> 2) YAML (if provided) -> 3) legacy env -> 4) APP__* env -> 5) CLI
    let mut config: AppConfig = load_layered(cli.config.as_deref(), ENV_ALIASES)?;
    cli.apply_overrides(&mut config);

    init_logging(&config.logging)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", to_yaml(&config)?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", to_yaml(config)?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Credential Orchestrator starting");

    // The single long-lived store handle; closed after the listener stops.
    let store = db::connect(&config.database).await?;
    let orchestrator = CredentialOrchestrator::new(store.clone(), &config.access);
    if config.access.require_admin {
        tracing::info!(super_role = %config.access.super_admin_role, "admin gate enabled on credential lookups");
    }

    let router = finish_router(
        orchestrator.router(),
        config.server.environment.expose_error_detail(),
    );

    let cancel = CancellationToken::new();
    cancel_on_signal(cancel.clone());

    let served = serve(router, &config.server.bind_addr(), cancel).await;

    store.close().await?;
    tracing::info!("credential store connection closed");
    served
}
