use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.key));

        self.repository
            .delete(params.key)
            .await
            .map_err(ProductError::from_repository(params.key))?;

        self.logger.info(&format!("Product deleted: {}", params.key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{BrandSummary, Product, ProductDetails};
    use crate::domain::product::paging::{Page, PageRequest};
    use crate::domain::product::value_objects::ProductKey;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, details: &ProductDetails) -> Result<Product, RepositoryError>;
            async fn get_by_key(&self, key: ProductKey) -> Result<Option<Product>, RepositoryError>;
            async fn update(&self, key: ProductKey, details: &ProductDetails) -> Result<Product, RepositoryError>;
            async fn delete(&self, key: ProductKey) -> Result<(), RepositoryError>;
            async fn list(&self, request: &PageRequest) -> Result<Page<Product>, RepositoryError>;
            async fn search(&self, term: &str, request: &PageRequest) -> Result<Page<Product>, RepositoryError>;
            async fn brand_summary(&self) -> Result<Vec<BrandSummary>, RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
            async fn create_all(&self, products: &[ProductDetails]) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_product_when_exists() {
        let key = ProductKey::from_repository(5);
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .withf(move |k| *k == key)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { key }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                key: ProductKey::from_repository(77),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound(_)));
    }
}
