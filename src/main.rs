//! SBRC utilities entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sbrc::api::create_router;
use sbrc::auth::AuthClient;
use sbrc::config::{FetchConfig, ServerConfig};
use sbrc::error::ServerError;

/// SBRC environment utilities.
#[derive(Parser, Debug)]
#[command(name = "sbrc")]
#[command(about = "Authenticated SBRC API probe and minimal status server")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the SBRC auth endpoint once and print the response body.
    Fetch,

    /// Run the status server until the process is killed.
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("sbrc=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Command::Fetch => cmd_fetch().await,
        Command::Serve => cmd_serve().await,
        Command::CheckConfig => cmd_check_config().await,
    }
}

/// Run the one-shot authenticated probe.
async fn cmd_fetch() -> anyhow::Result<()> {
    let config = FetchConfig::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    config.validate()?;

    let client = AuthClient::new(&config)?;
    let body = client.fetch().await?;

    info!("{}", String::from_utf8_lossy(&body));

    Ok(())
}

/// Run the status server.
async fn cmd_serve() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("listening on {}", addr);

    axum::serve(listener, create_router())
        .await
        .map_err(ServerError::Serve)?;

    Ok(())
}

/// Check configuration validity for both components.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SBRC - CONFIGURATION CHECK");
    println!("======================================================================");

    let mut failed = false;

    print!("Loading fetch configuration... ");
    match FetchConfig::load().and_then(|c| c.validate()) {
        Ok(()) => {
            println!("OK");
            println!("  Token: present");
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            failed = true;
        }
    }

    print!("Loading server configuration... ");
    match ServerConfig::load() {
        Ok(config) => match config.socket_addr() {
            Ok(addr) => {
                println!("OK");
                println!("  Listen address: {}", addr);
            }
            Err(e) => {
                println!("FAILED");
                println!("  Error: {}", e);
                failed = true;
            }
        },
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            failed = true;
        }
    }

    println!("======================================================================");
    if failed {
        println!("CONFIGURATION CHECK FAILED");
        println!("======================================================================");
        return Err(anyhow::anyhow!("Configuration check failed"));
    }

    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
