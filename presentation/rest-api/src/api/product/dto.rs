use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::{BrandSummary, NewProductProps, Product};
use business::domain::product::paging::Page;

/// Product fields accepted on create and update.
///
/// Every field is optional at the transport level so that missing values are
/// reported as validation failures rather than as malformed bodies. A
/// `product_key` in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Object)]
pub struct ProductRequest {
    pub retailer: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub product_name: Option<String>,
    pub product_description: Option<String>,
    pub price: Option<f64>,
}

impl From<ProductRequest> for NewProductProps {
    fn from(request: ProductRequest) -> Self {
        NewProductProps {
            retailer: request.retailer.unwrap_or_default(),
            brand: request.brand.unwrap_or_default(),
            model: request.model.unwrap_or_default(),
            name: request.product_name.unwrap_or_default(),
            description: request.product_description,
            price: request.price.and_then(price_from_f64),
        }
    }
}

/// Goes through the shortest round-tripping string so that `19.99` stays `19.99`.
fn price_from_f64(price: f64) -> Option<BigDecimal> {
    if !price.is_finite() {
        return None;
    }
    BigDecimal::from_str(&price.to_string()).ok()
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub product_key: i64,
    pub retailer: String,
    pub brand: String,
    pub model: String,
    pub product_name: String,
    pub product_description: Option<String>,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let details = product.details;
        ProductResponse {
            product_key: product.key.value(),
            retailer: details.retailer().to_string(),
            brand: details.brand().to_string(),
            model: details.model().to_string(),
            product_name: details.name().to_string(),
            product_description: details.description().map(str::to_string),
            price: details.price().to_f64().unwrap_or_default(),
        }
    }
}

/// One page of products plus paging metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductPageResponse {
    pub content: Vec<ProductResponse>,
    #[oai(rename = "totalElements")]
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
    #[oai(rename = "totalPages")]
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    pub page: u32,
    pub size: u32,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let total_pages = page.total_pages();
        let page = page.map(ProductResponse::from);
        ProductPageResponse {
            content: page.content,
            total_elements: page.total_elements,
            total_pages,
            page: page.page,
            size: page.size,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BrandSummaryResponse {
    pub brand: String,
    pub count: u64,
}

impl From<BrandSummary> for BrandSummaryResponse {
    fn from(summary: BrandSummary) -> Self {
        BrandSummaryResponse {
            brand: summary.brand,
            count: summary.count,
        }
    }
}
