use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDetails};
use crate::domain::product::value_objects::ProductKey;

pub struct UpdateProductParams {
    pub key: ProductKey,
    pub details: ProductDetails,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
