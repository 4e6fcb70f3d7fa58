use bigdecimal::BigDecimal;

use super::validation::{self, ValidationErrors};
use super::value_objects::ProductKey;

/// Raw, unvalidated product fields as received from a client or seed file.
#[derive(Debug, Clone, Default)]
pub struct NewProductProps {
    pub retailer: String,
    pub brand: String,
    pub model: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
}

/// The mutable fields of a product, guaranteed to satisfy every field constraint.
///
/// Only obtainable through [`ProductDetails::new`], which validates, or
/// [`ProductDetails::from_repository`] for rows that were validated on write.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    retailer: String,
    brand: String,
    model: String,
    name: String,
    description: Option<String>,
    price: BigDecimal,
}

impl ProductDetails {
    pub fn new(props: NewProductProps) -> Result<Self, ValidationErrors> {
        validation::validate(&props)?;

        let NewProductProps {
            retailer,
            brand,
            model,
            name,
            description,
            price,
        } = props;
        let price = price.ok_or_else(|| {
            ValidationErrors::single(validation::fields::PRICE, "Price is required")
        })?;

        Ok(Self {
            retailer,
            brand,
            model,
            name,
            description,
            price,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        retailer: String,
        brand: String,
        model: String,
        name: String,
        description: Option<String>,
        price: BigDecimal,
    ) -> Self {
        Self {
            retailer,
            brand,
            model,
            name,
            description,
            price,
        }
    }

    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> &BigDecimal {
        &self.price
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub key: ProductKey,
    pub details: ProductDetails,
}

impl Product {
    pub fn from_repository(key: ProductKey, details: ProductDetails) -> Self {
        Self { key, details }
    }
}

/// Number of products sharing one brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandSummary {
    pub brand: String,
    pub count: u64,
}
