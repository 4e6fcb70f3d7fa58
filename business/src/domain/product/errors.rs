use crate::domain::errors::{ParameterError, RepositoryError};

use super::value_objects::ProductKey;
use super::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound(ProductKey),
    #[error("product.validation_failed")]
    Validation(#[from] ValidationErrors),
    #[error("product.invalid_parameter")]
    InvalidParameter(#[from] ParameterError),
    #[error("product.invalid_seed_record")]
    InvalidSeedRecord {
        index: usize,
        errors: ValidationErrors,
    },
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Maps a store miss on `key` to [`ProductError::NotFound`].
    pub fn from_repository(key: ProductKey) -> impl FnOnce(RepositoryError) -> Self {
        move |e| match e {
            RepositoryError::NotFound => ProductError::NotFound(key),
            other => ProductError::Repository(other),
        }
    }
}
