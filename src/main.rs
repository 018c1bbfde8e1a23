//! CropFlow API server
//!
//! ```sh
//! # Default config (~/.config/cropflow/config.toml)
//! cropflow-api
//!
//! # Custom config path and port
//! cropflow-api --config /etc/cropflow/config.toml --port 9000
//!
//! # Validate config without starting
//! cropflow-api --check
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info};

use cropflow::config::{AppConfig, CONFIG_ENV_VAR};
use cropflow::infrastructure::database::redact_url;
use cropflow::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "cropflow-api",
    version,
    about = "REST API for farms, crops and fertilizers",
    long_about = "CropFlow: CRUD REST API for agricultural records with \
                  JWT authentication and role-based access.\n\n\
                  Default config: ~/.config/cropflow/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip creating the default admin account.
    #[arg(long)]
    no_admin: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(cropflow::default_config_path);

    if cli.check {
        return check_config(&config_path, &cli);
    }

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };
    config.apply_env()?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config);

    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }
    if let Ok(path) = dotenv {
        info!("Environment loaded from {}", path.display());
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        create_default_admin: !cli.no_admin,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}

/// Validate the config file and environment, print a summary and exit.
/// Any load or override error is returned so the exit code is non-zero.
fn check_config(config_path: &Path, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::check(config_path)?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    println!("Configuration is valid");
    println!("   Config file : {}", config_path.display());
    println!("   Address     : {}", config.server.address());
    println!("   Database    : {}", redact_url(&config.database.url));
    println!("   Log level   : {}", config.logging.level);
    println!("   Log format  : {}", config.logging.format);
    Ok(())
}
