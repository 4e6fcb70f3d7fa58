use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_key::{
    GetProductByKeyParams, GetProductByKeyUseCase,
};

pub struct GetProductByKeyUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByKeyUseCase for GetProductByKeyUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductByKeyParams,
    ) -> Result<Option<Product>, ProductError> {
        self.logger
            .debug(&format!("Fetching product by key: {}", params.key));

        let product = self.repository.get_by_key(params.key).await?;
        if product.is_none() {
            self.logger
                .debug(&format!("No product with key: {}", params.key));
        }
        Ok(product)
    }
}
