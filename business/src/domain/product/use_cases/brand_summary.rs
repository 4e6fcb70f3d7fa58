use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::BrandSummary;

#[async_trait]
pub trait GetBrandSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BrandSummary>, ProductError>;
}
