use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::error::ConfigError;

/// Initialize database connection pool from environment variables and apply migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: migrations directory (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing {
        name: "DATABASE_URL",
    })?;

    let mut config = DatabaseConfig::new(db_url);
    if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS") {
        let max_connections = raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value: raw.clone(),
                reason: "must be a positive integer".to_string(),
            })?;
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config).await?;

    let migrations_path = env::var("MIGRATIONS_PATH").unwrap_or_else(|_| "./migrations".to_string());
    run_migrations(&pool, &migrations_path)
        .await
        .with_context(|| format!("applying migrations from {migrations_path}"))?;

    Ok(pool)
}
