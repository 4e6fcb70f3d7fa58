use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::BrandSummary;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::brand_summary::GetBrandSummaryUseCase;

pub struct GetBrandSummaryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBrandSummaryUseCase for GetBrandSummaryUseCaseImpl {
    async fn execute(&self) -> Result<Vec<BrandSummary>, ProductError> {
        self.logger.info("Computing brand summary");
        let summary = self.repository.brand_summary().await?;
        self.logger
            .info(&format!("Found {} distinct brands", summary.len()));
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{Product, ProductDetails};
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
    async fn should_return_one_row_per_brand() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_brand_summary().returning(|| {
            Ok(vec![
                BrandSummary {
                    brand: "Zed".to_string(),
                    count: 2,
                },
                BrandSummary {
                    brand: "Acme".to_string(),
                    count: 1,
                },
            ])
        });

        let use_case = GetBrandSummaryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let summary = use_case.execute().await.unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.iter().map(|s| s.count).sum::<u64>(), 3);
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_brand_summary()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetBrandSummaryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            ProductError::Repository(_)
        ));
    }
}
