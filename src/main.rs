use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info};
use std::sync::Arc;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;
use toolroute::Router;
use toolroute::llm::OpenAiClient;
use toolroute::server::{self, AppState};
use toolroute::tools::ToolCatalog;

fn setup_logging() {
    // Level filtering is done through the global max level so the config file can adjust it later
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .target(env_logger::Target::Stderr)
        .init();
    if !rust_log_set() {
        log::set_max_level(LevelFilter::Info);
    }
}

fn rust_log_set() -> bool {
    std::env::var_os("RUST_LOG").is_some()
}

/// Apply `log_level` from the config unless RUST_LOG already decided
fn apply_log_level(config: &Config) {
    if rust_log_set() {
        return;
    }
    match config.level_filter() {
        Some(level) => log::set_max_level(level),
        None => {
            if let Some(raw) = &config.log_level {
                log::warn!("Ignoring unknown log_level '{}'", raw);
            }
        }
    }
}

/// Build the router once; it is shared read-only by every request
fn build_router(config: &Config) -> Result<Router<OpenAiClient>> {
    let client = OpenAiClient::new(config.llm.to_client_config()).context("Failed to create completion client")?;
    info!("Using model {} at {}", config.llm.model, config.llm.base_url);
    Ok(Router::new(Arc::new(client), Arc::new(ToolCatalog::builtin())))
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => handle_serve_command(None, cli, config).await,
        Some(Commands::Serve { bind }) => handle_serve_command(bind.as_deref(), cli, config).await,
        Some(Commands::Route { query }) => handle_route_command(query, config).await,
        Some(Commands::Tools) => handle_tools_command(),
    }
}

async fn handle_serve_command(bind: Option<&str>, cli: &Cli, config: &Config) -> Result<()> {
    let addr = bind.unwrap_or(config.server.bind.as_str());
    let router = build_router(config)?;
    let app = server::build_router(AppState::new(router));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    if cli.is_verbose() {
        println!("{} http://{}", "Serving on".green(), addr);
    }
    info!("Starting server on {}", addr);
    server::serve(listener, app).await.context("Server failed")?;
    Ok(())
}

async fn handle_route_command(query: &str, config: &Config) -> Result<()> {
    info!("Routing query: {}", query);
    let router = build_router(config)?;
    let decision = router.route(query).await.context("Routing failed")?;
    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}

fn handle_tools_command() -> Result<()> {
    let catalog = ToolCatalog::builtin();
    println!("{}", serde_json::to_string_pretty(&catalog.to_llm_definitions())?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first so config fallback warnings are visible
    setup_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(&config);

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
