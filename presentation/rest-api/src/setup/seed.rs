use std::sync::Arc;

use anyhow::Context;
use persistence::seed::read_seed_file;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::seed::{
    SeedOutcome, SeedProductsParams, SeedProductsUseCase,
};

use crate::config::seed_config::SeedConfig;

/// Loads the seed file into an empty catalog.
///
/// A missing file only logs a warning. Unreadable or malformed files and invalid
/// records abort startup.
pub async fn load_initial_catalog(
    config: &SeedConfig,
    use_case: Arc<dyn SeedProductsUseCase>,
) -> anyhow::Result<()> {
    if !config.enabled {
        tracing::info!("seed loading disabled");
        return Ok(());
    }

    let path = config.path.display().to_string();
    let Some(records) = read_seed_file(&config.path)
        .await
        .with_context(|| format!("reading seed file {path}"))?
    else {
        tracing::warn!(path = %path, "seed file not found, starting with an empty catalog");
        return Ok(());
    };

    let outcome = use_case
        .execute(SeedProductsParams { records })
        .await
        .map_err(|err| match err {
            ProductError::InvalidSeedRecord { index, errors } => {
                anyhow::anyhow!("seed record {index} in {path} is invalid: {errors}")
            }
            other => anyhow::Error::new(other).context(format!("seeding from {path}")),
        })?;

    match outcome {
        SeedOutcome::Skipped { existing } => {
            tracing::info!(existing, "catalog not empty, seed skipped")
        }
        SeedOutcome::Loaded { count } => tracing::info!(count, path = %path, "catalog seeded"),
    }
    Ok(())
}
