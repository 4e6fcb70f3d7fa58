use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::paging::{Page, PageRequest};

pub struct ListProductsParams {
    pub page: PageRequest,
    /// Free text; blank or absent lists every product.
    pub search: Option<String>,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Page<Product>, ProductError>;
}
