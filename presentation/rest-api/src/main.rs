use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads configuration, wires dependencies, and starts the HTTP server.
///
/// - config/: server, CORS and model provider configuration
/// - setup/: dependency injection and server setup
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration; a missing provider key stops startup here
    let config = AppConfig::from_env().inspect_err(|err| {
        tracing::error!("Invalid configuration: {}", err);
    })?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.openai)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
