/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}

/// Malformed path or query parameters, rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("parameter.invalid_key")]
    InvalidKey(String),
    #[error("parameter.invalid_page")]
    InvalidPage(i64),
    #[error("parameter.page_out_of_range")]
    PageOutOfRange(i64),
    #[error("parameter.invalid_size")]
    InvalidSize(i64),
    #[error("parameter.invalid_sort")]
    InvalidSort(String),
    #[error("parameter.search_too_short")]
    SearchTooShort { min: usize },
    #[error("parameter.search_too_long")]
    SearchTooLong { max: usize },
}

impl ParameterError {
    /// Human readable description, safe to return to clients.
    pub fn detail(&self) -> String {
        match self {
            ParameterError::InvalidKey(raw) => {
                format!("Product key must be a positive integer, got '{raw}'")
            }
            ParameterError::InvalidPage(page) => {
                format!("Page index must not be negative, got {page}")
            }
            ParameterError::PageOutOfRange(page) => {
                format!("Page index is too large, got {page}")
            }
            ParameterError::InvalidSize(size) => {
                format!("Page size must be at least 1, got {size}")
            }
            ParameterError::InvalidSort(raw) => format!("Unsupported sort specification '{raw}'"),
            ParameterError::SearchTooShort { min } => {
                format!("Search term must be at least {min} characters")
            }
            ParameterError::SearchTooLong { max } => {
                format!("Search term cannot exceed {max} characters")
            }
        }
    }
}
