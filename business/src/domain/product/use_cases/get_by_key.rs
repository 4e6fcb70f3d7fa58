use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductKey;

pub struct GetProductByKeyParams {
    pub key: ProductKey,
}

/// Absence is reported as `Ok(None)`; callers decide what a miss means.
#[async_trait]
pub trait GetProductByKeyUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByKeyParams)
    -> Result<Option<Product>, ProductError>;
}
