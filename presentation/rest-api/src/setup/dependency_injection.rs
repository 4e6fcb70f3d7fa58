use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::brand_summary::GetBrandSummaryUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_key::GetProductByKeyUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::seed::SeedProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::use_cases::seed::SeedProductsUseCase;

use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub seed_use_case: Arc<dyn SeedProductsUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, catalog: &CatalogConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            search_limits: catalog.search,
            logger: logger.clone(),
        });
        let get_by_key_use_case = Arc::new(GetProductByKeyUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let brand_summary_use_case = Arc::new(GetBrandSummaryUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let seed_use_case = Arc::new(SeedProductsUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            list_use_case,
            get_by_key_use_case,
            update_use_case,
            delete_use_case,
            brand_summary_use_case,
            catalog.paging,
        );

        Self {
            health_api,
            product_api,
            seed_use_case,
        }
    }
}
