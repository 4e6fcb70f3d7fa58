use std::str::FromStr;

use business::domain::product::paging::{HARD_MAX_PAGE_SIZE, PagingLimits, SearchLimits};

use super::error::ConfigError;

const MAX_SEARCH_LENGTH_CEILING: usize = 500;

/// Paging and search limits applied to product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    pub paging: PagingLimits,
    pub search: SearchLimits,
}

impl CatalogConfig {
    /// Load catalog limits from environment variables
    ///
    /// Environment variables:
    /// - PAGINATION_DEFAULT_SIZE: page size when `size` is omitted (default: 10)
    /// - PAGINATION_MAX_SIZE: ceiling for `size` (default: 200, at most 1000)
    /// - SEARCH_MIN_LENGTH: shortest accepted search term (default: 1)
    /// - SEARCH_MAX_LENGTH: longest accepted search term (default: 100, at most 500)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = PagingLimits::default();
        let default_size = read(&lookup, "PAGINATION_DEFAULT_SIZE", defaults.default_size)?;
        let max_size = read(&lookup, "PAGINATION_MAX_SIZE", defaults.max_size)?;

        check_range("PAGINATION_DEFAULT_SIZE", default_size, 1, HARD_MAX_PAGE_SIZE)?;
        check_range("PAGINATION_MAX_SIZE", max_size, 1, HARD_MAX_PAGE_SIZE)?;
        if default_size > max_size {
            return Err(ConfigError::Invalid {
                name: "PAGINATION_DEFAULT_SIZE",
                value: default_size.to_string(),
                reason: format!("must not exceed PAGINATION_MAX_SIZE ({max_size})"),
            });
        }

        let search_defaults = SearchLimits::default();
        let min_length = read(&lookup, "SEARCH_MIN_LENGTH", search_defaults.min_length)?;
        let max_length = read(&lookup, "SEARCH_MAX_LENGTH", search_defaults.max_length)?;

        check_range("SEARCH_MAX_LENGTH", max_length, 1, MAX_SEARCH_LENGTH_CEILING)?;
        check_range("SEARCH_MIN_LENGTH", min_length, 1, max_length)?;

        Ok(Self {
            paging: PagingLimits {
                default_size,
                max_size,
            },
            search: SearchLimits {
                min_length,
                max_length,
            },
        })
    }
}

fn read<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value,
            reason: "not a number".to_string(),
        }),
    }
}

fn check_range<T: PartialOrd + std::fmt::Display>(
    name: &'static str,
    value: T,
    min: T,
    max: T,
) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
            reason: format!("must be between {min} and {max}"),
        });
    }
    Ok(())
}
