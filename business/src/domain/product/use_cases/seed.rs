use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::NewProductProps;

pub struct SeedProductsParams {
    pub records: Vec<NewProductProps>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already held products; nothing was imported.
    Skipped { existing: u64 },
    Loaded { count: u64 },
}

/// Imports an initial catalog into an empty store, all records or none.
#[async_trait]
pub trait SeedProductsUseCase: Send + Sync {
    async fn execute(&self, params: SeedProductsParams) -> Result<SeedOutcome, ProductError>;
}
