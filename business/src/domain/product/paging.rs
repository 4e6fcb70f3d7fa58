use std::str::FromStr;

use strum_macros::EnumString;

use crate::domain::errors::ParameterError;

/// Largest page size any configuration may allow.
pub const HARD_MAX_PAGE_SIZE: u32 = 1000;

/// Columns a listing may be ordered by.
///
/// Accepts wire names as well as the camelCase names used by older clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum SortField {
    #[strum(serialize = "product_key", serialize = "productKey", serialize = "key")]
    ProductKey,
    #[strum(serialize = "retailer")]
    Retailer,
    #[strum(serialize = "brand")]
    Brand,
    #[strum(serialize = "model")]
    Model,
    #[strum(serialize = "product_name", serialize = "productName", serialize = "name")]
    ProductName,
    #[strum(
        serialize = "product_description",
        serialize = "productDescription",
        serialize = "description"
    )]
    ProductDescription,
    #[strum(serialize = "price")]
    Price,
}

impl SortField {
    /// Column name in the `products` table.
    pub fn column(&self) -> &'static str {
        match self {
            SortField::ProductKey => "product_key",
            SortField::Retailer => "retailer",
            SortField::Brand => "brand",
            SortField::Model => "model",
            SortField::ProductName => "product_name",
            SortField::ProductDescription => "product_description",
            SortField::Price => "price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for Sort {
    /// Insertion order.
    fn default() -> Self {
        Self {
            field: SortField::ProductKey,
            direction: SortDirection::Asc,
        }
    }
}

impl Sort {
    /// Parses `field` or `field,direction`.
    pub fn parse(raw: &str) -> Result<Self, ParameterError> {
        let invalid = || ParameterError::InvalidSort(raw.to_string());
        let mut parts = raw.split(',').map(str::trim);

        let field = parts
            .next()
            .filter(|f| !f.is_empty())
            .and_then(|f| SortField::from_str(f).ok())
            .ok_or_else(invalid)?;
        let direction = match parts.next() {
            None | Some("") => SortDirection::Asc,
            Some(d) => SortDirection::from_str(d).map_err(|_| invalid())?,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { field, direction })
    }
}

/// Page size settings, checked at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingLimits {
    pub default_size: u32,
    pub max_size: u32,
}

impl Default for PagingLimits {
    fn default() -> Self {
        Self {
            default_size: 10,
            max_size: 200,
        }
    }
}

/// A zero-based page index, a bounded page size and an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Sort,
}

impl PageRequest {
    /// Builds a request from raw query values.
    ///
    /// Missing values fall back to defaults. Sizes above the configured
    /// ceiling are clamped to it.
    pub fn resolve(
        page: Option<i64>,
        size: Option<i64>,
        sort: Option<&str>,
        limits: &PagingLimits,
    ) -> Result<Self, ParameterError> {
        let page = match page {
            None => 0,
            Some(p) if p < 0 => return Err(ParameterError::InvalidPage(p)),
            Some(p) => u32::try_from(p).map_err(|_| ParameterError::PageOutOfRange(p))?,
        };
        let size = match size {
            None => limits.default_size,
            Some(s) if s < 1 => return Err(ParameterError::InvalidSize(s)),
            Some(s) => s.min(i64::from(limits.max_size)) as u32,
        };
        let sort = match sort.map(str::trim).filter(|s| !s.is_empty()) {
            None => Sort::default(),
            Some(raw) => Sort::parse(raw)?,
        };

        Ok(Self { page, size, sort })
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// A slice of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: u64, request: &PageRequest) -> Self {
        Self {
            content,
            total_elements,
            page: request.page,
            size: request.size,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page: self.page,
            size: self.size,
        }
    }
}

/// Accepted length of a trimmed search term, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 100,
        }
    }
}

impl SearchLimits {
    /// Trims the term. `None` means "no search"; out-of-range terms are rejected.
    pub fn term(&self, raw: Option<&str>) -> Result<Option<String>, ParameterError> {
        let Some(term) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let length = term.chars().count();
        if length < self.min_length {
            return Err(ParameterError::SearchTooShort {
                min: self.min_length,
            });
        }
        if length > self.max_length {
            return Err(ParameterError::SearchTooLong {
                max: self.max_length,
            });
        }
        Ok(Some(term.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_parameters_are_missing() {
        let request = PageRequest::resolve(None, None, None, &PagingLimits::default()).unwrap();

        assert_eq!(request.page, 0);
        assert_eq!(request.size, 10);
        assert_eq!(request.sort, Sort::default());
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn should_clamp_size_to_configured_maximum() {
        let request =
            PageRequest::resolve(Some(2), Some(5000), None, &PagingLimits::default()).unwrap();

        assert_eq!(request.size, 200);
        assert_eq!(request.offset(), 400);
    }

    #[test]
    fn should_reject_negative_page_and_non_positive_size() {
        let limits = PagingLimits::default();

        assert_eq!(
            PageRequest::resolve(Some(-1), None, None, &limits),
            Err(ParameterError::InvalidPage(-1))
        );
        assert_eq!(
            PageRequest::resolve(None, Some(0), None, &limits),
            Err(ParameterError::InvalidSize(0))
        );
    }

    #[test]
    fn should_reject_page_beyond_addressable_range() {
        let limits = PagingLimits::default();

        let result = PageRequest::resolve(Some(5_000_000_000), None, None, &limits);

        assert_eq!(result, Err(ParameterError::PageOutOfRange(5_000_000_000)));
        assert_eq!(
            ParameterError::PageOutOfRange(5_000_000_000).detail(),
            "Page index is too large, got 5000000000"
        );
    }

    #[test]
    fn should_parse_sort_with_and_without_direction() {
        assert_eq!(
            Sort::parse("price,desc").unwrap(),
            Sort {
                field: SortField::Price,
                direction: SortDirection::Desc
            }
        );
        assert_eq!(
            Sort::parse("productName").unwrap(),
            Sort {
                field: SortField::ProductName,
                direction: SortDirection::Asc
            }
        );
        assert_eq!(
            Sort::parse(" brand , DESC ").unwrap().direction,
            SortDirection::Desc
        );
    }

    #[test]
    fn should_reject_unknown_sort_field_or_direction() {
        for raw in ["password", "price,sideways", "price,asc,extra", ",asc"] {
            assert_eq!(
                Sort::parse(raw),
                Err(ParameterError::InvalidSort(raw.to_string())),
                "{raw}"
            );
        }
    }

    #[test]
    fn should_compute_total_pages() {
        let request = PageRequest::resolve(None, Some(10), None, &PagingLimits::default()).unwrap();

        assert_eq!(Page::<u8>::new(vec![], 0, &request).total_pages(), 0);
        assert_eq!(Page::<u8>::new(vec![], 10, &request).total_pages(), 1);
        assert_eq!(Page::<u8>::new(vec![], 11, &request).total_pages(), 2);
    }

    #[test]
    fn should_treat_blank_search_as_no_search() {
        let limits = SearchLimits::default();

        assert_eq!(limits.term(None), Ok(None));
        assert_eq!(limits.term(Some("")), Ok(None));
        assert_eq!(limits.term(Some("   ")), Ok(None));
        assert_eq!(limits.term(Some("  sony ")), Ok(Some("sony".to_string())));
    }

    #[test]
    fn should_reject_search_outside_length_limits() {
        let limits = SearchLimits {
            min_length: 3,
            max_length: 5,
        };

        assert_eq!(
            limits.term(Some("ab")),
            Err(ParameterError::SearchTooShort { min: 3 })
        );
        assert_eq!(
            limits.term(Some("abcdef")),
            Err(ParameterError::SearchTooLong { max: 5 })
        );
    }
}
