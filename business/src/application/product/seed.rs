use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetails;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::seed::{
    SeedOutcome, SeedProductsParams, SeedProductsUseCase,
};

pub struct SeedProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SeedProductsUseCase for SeedProductsUseCaseImpl {
    async fn execute(&self, params: SeedProductsParams) -> Result<SeedOutcome, ProductError> {
        let existing = self.repository.count().await?;
        if existing > 0 {
            self.logger.info(&format!(
                "Catalog already holds {existing} products, skipping seed"
            ));
            return Ok(SeedOutcome::Skipped { existing });
        }

        let mut products = Vec::with_capacity(params.records.len());
        for (index, record) in params.records.into_iter().enumerate() {
            let details = ProductDetails::new(record).map_err(|errors| {
                self.logger
                    .error(&format!("Seed record {index} is invalid: {errors}"));
                ProductError::InvalidSeedRecord { index, errors }
            })?;
            products.push(details);
        }

        let count = self.repository.create_all(&products).await?;
        self.logger.info(&format!("Seeded {count} products"));
        Ok(SeedOutcome::Loaded { count })
    }
}
