//! comicw: convention calendar server
//!
//! Usage:
//!   comicw                    - Start the HTTP server
//!   comicw --config <path>    - Start with an explicit TOML config file
//!   comicw --help             - Show help

use cw_calendar::ComicwClient;
use cw_core::Config;
use tracing_subscriber::EnvFilter;

/// Run mode
#[derive(Debug, PartialEq, Eq)]
enum RunMode {
    /// Serve HTTP, optionally with an explicit config file
    Server { config_path: Option<String> },
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mode = parse_args(std::env::args().skip(1))?;

    let config_path = match mode {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("comicw {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Server { config_path } => config_path,
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    let config = match config_path {
        Some(path) => Config::from_toml_file(&path),
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting comicw...");
    tracing::info!("Event store: {}", config.store.db_path);

    let client = ComicwClient::new(&config.upstream)
        .map_err(|e| anyhow::anyhow!("Failed to create upstream client: {}", e))?;

    run_server(config, client).await
}

/// Parse command line arguments (program name already skipped)
fn parse_args<I>(args: I) -> anyhow::Result<RunMode>
where
    I: IntoIterator<Item = String>,
{
    let mut config_path = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(RunMode::Help),
            "--version" | "-v" => return Ok(RunMode::Version),
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("{} requires a path", arg))?;
                config_path = Some(path);
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(RunMode::Server { config_path })
}

/// Print help message
fn print_help() {
    println!("comicw - comic convention calendar server");
    println!();
    println!("Usage:");
    println!("  comicw                   Start the HTTP server");
    println!("  comicw --config <path>   Use the given TOML config file");
    println!("  comicw --help            Show this help message");
    println!("  comicw --version         Show version");
    println!();
    println!("Environment Variables:");
    println!("  COMICW_HOST                    Bind address (default: 0.0.0.0)");
    println!("  COMICW_PORT                    HTTP port (default: 8000)");
    println!("  COMICW_DB_PATH                 SQLite file (default: comicw.db)");
    println!("  COMICW_UPSTREAM_URL            Event listing endpoint");
    println!("  COMICW_UPSTREAM_CATEGORY       Listing type form field (default: comic)");
    println!("  COMICW_UPSTREAM_TIMEOUT_SECS   Upstream request timeout (default: none)");
    println!("  COMICW_CALENDAR_NAME           Calendar display name (default: comicw)");
    println!("  RUST_LOG                       Log filter (default: info)");
}

/// Run the HTTP server until Ctrl+C
async fn run_server(config: Config, client: ComicwClient) -> anyhow::Result<()> {
    let addr = config.bind_addr();

    let handle = tokio::spawn(async move {
        if let Err(e) = cw_api::start_server(config, client).await {
            tracing::error!("HTTP API error: {}", e);
        }
    });
    tracing::info!("HTTP API server starting on {}", addr);
    tracing::info!("Press Ctrl+C to exit");

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    handle.abort();

    tracing::info!("Shutdown complete");
    Ok(())
}
