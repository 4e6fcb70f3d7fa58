use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{BrandSummary, Product, ProductDetails};
use super::paging::{Page, PageRequest};
use super::value_objects::ProductKey;

/// Persistent store of products. Keys are assigned by the store on `create`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, details: &ProductDetails) -> Result<Product, RepositoryError>;
    async fn get_by_key(&self, key: ProductKey) -> Result<Option<Product>, RepositoryError>;
    /// Overwrites every mutable field. Fails with `NotFound` when the key is absent.
    async fn update(
        &self,
        key: ProductKey,
        details: &ProductDetails,
    ) -> Result<Product, RepositoryError>;
    /// Fails with `NotFound` when the key is absent.
    async fn delete(&self, key: ProductKey) -> Result<(), RepositoryError>;
    async fn list(&self, request: &PageRequest) -> Result<Page<Product>, RepositoryError>;
    /// Case-insensitive substring match on name, brand or model.
    async fn search(
        &self,
        term: &str,
        request: &PageRequest,
    ) -> Result<Page<Product>, RepositoryError>;
    async fn brand_summary(&self) -> Result<Vec<BrandSummary>, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    /// Inserts all products atomically: either every row is stored or none is.
    async fn create_all(&self, products: &[ProductDetails]) -> Result<u64, RepositoryError>;
}
