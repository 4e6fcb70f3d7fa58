use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.details.name()));

        let product = self.repository.create(&params.details).await?;

        self.logger
            .info(&format!("Product created with key: {}", product.key));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use mockall::mock;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{BrandSummary, NewProductProps, ProductDetails};
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

    fn zed_z1() -> ProductDetails {
        ProductDetails::new(NewProductProps {
            retailer: "Acme".to_string(),
            brand: "Zed".to_string(),
            model: "Z1".to_string(),
            name: "Zed Z1".to_string(),
            description: None,
            price: Some(BigDecimal::from_str("19.99").unwrap()),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_product_with_assigned_key_when_created() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|details| {
                Ok(Product::from_repository(
                    ProductKey::from_repository(7),
                    details.clone(),
                ))
            });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams { details: zed_z1() })
            .await;

        let product = result.unwrap();
        assert_eq!(product.key.value(), 7);
        assert_eq!(product.details, zed_z1());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams { details: zed_z1() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
