mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use credential_orchestrator_sdk::CredentialClient;
use erp_bootstrap::config::to_yaml;
use erp_bootstrap::http::{finish_router, serve};
use erp_bootstrap::load_layered;
use erp_bootstrap::logging::init_logging;
use erp_bootstrap::signals::cancel_on_signal;
use mimalloc::MiMalloc;
use tenant_api::TenantApi;
use tenant_api::infra::credentials::HttpCredentialClient;
use tenant_api::infra::storage::connection::SeaOrmTenantConnector;
use tokio_util::sync::CancellationToken;

use crate::config::{AppConfig, ENV_ALIASES};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Tenant API - colors CRUD against each tenant's own database
#[derive(Parser)]
#[command(name = "tenant-api-server")]
#[command(about = "Tenant API - colors CRUD against each tenant's own database")]
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

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Create the colors table in a tenant's database if it is missing
    ProvisionTenant {
        /// Tenant email as registered with the credential orchestrator
        email: String,
    },
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
        Commands::ProvisionTenant { email } => provision_tenant(&config, &email).await,
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    if config.credentials.base_url().is_none() {
        tracing::warn!("credentials.base_url is not set");
    }
    println!("Configuration is valid");
    println!("{}", to_yaml(config)?);
    Ok(())
}

async fn provision_tenant(config: &AppConfig, email: &str) -> Result<()> {
    let client: Arc<dyn CredentialClient> =
        Arc::new(HttpCredentialClient::new(&config.credentials)?);
    let connector = SeaOrmTenantConnector::new(client, config.tenant_db.clone());

    let tenant = connector.provision(email).await?;
    println!("Tenant {} ({}) is provisioned", tenant.name, tenant.email);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Tenant API starting");

    let api = TenantApi::from_config(&config.credentials, &config.tenant_db, &config.login)?;
    let router = finish_router(api.router(), config.server.environment.expose_error_detail());

    let cancel = CancellationToken::new();
    cancel_on_signal(cancel.clone());

    serve(router, &config.server.bind_addr(), cancel).await
}
