use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::paging::{Page, SearchLimits};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};

/// Lists products, or searches them when a non-blank term is given.
pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub search_limits: SearchLimits,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Page<Product>, ProductError> {
        let term = self.search_limits.term(params.search.as_deref())?;

        let page = match term {
            Some(term) => {
                self.logger.info(&format!(
                    "Searching products for '{}' (page {}, size {})",
                    term, params.page.page, params.page.size
                ));
                self.repository.search(&term, &params.page).await?
            }
            None => {
                self.logger.info(&format!(
                    "Listing products (page {}, size {})",
                    params.page.page, params.page.size
                ));
                self.repository.list(&params.page).await?
            }
        };

        self.logger.info(&format!(
            "Returning {} of {} products",
            page.content.len(),
            page.total_elements
        ));
        Ok(page)
    }
}
