use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::{BrandSummary, Product, ProductDetails};
use business::domain::product::value_objects::ProductKey;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub product_key: i64,
    pub retailer: String,
    pub brand: String,
    pub model: String,
    pub product_name: String,
    pub product_description: Option<String>,
    pub price: BigDecimal,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductKey::from_repository(self.product_key),
            ProductDetails::from_repository(
                self.retailer,
                self.brand,
                self.model,
                self.product_name,
                self.product_description,
                self.price,
            ),
        )
    }
}

#[derive(Debug, FromRow)]
pub struct BrandSummaryEntity {
    pub brand: String,
    pub count: i64,
}

impl BrandSummaryEntity {
    pub fn into_domain(self) -> BrandSummary {
        BrandSummary {
            brand: self.brand,
            count: u64::try_from(self.count).unwrap_or_default(),
        }
    }
}
