use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, seed, server::Server};

/// Product catalog service entry point
///
/// Initializes the application, wires dependencies, seeds an empty catalog and
/// starts the HTTP server.
///
/// Layout:
/// - config/: Application configuration (server, CORS, database, catalog limits, seed)
/// - setup/: Dependency injection, seed loading and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.catalog);

    // 6. Seed an empty catalog
    seed::load_initial_catalog(&config.seed, container.seed_use_case.clone()).await?;

    // 7. Run server
    Server::run(config, container).await?;

    Ok(())
}
