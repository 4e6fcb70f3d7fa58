//! Reads the initial catalog from a JSON array of products in the wire format.

use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::Deserialize;
use thiserror::Error;

use business::domain::product::model::NewProductProps;

#[derive(Debug, Error)]
pub enum SeedFileError {
    #[error("seed.read_error")]
    Read(#[source] std::io::Error),
    #[error("seed.parse_error")]
    Parse(#[source] serde_json::Error),
    #[error("seed.invalid_price")]
    InvalidPrice { index: usize, value: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedPrice {
    Number(serde_json::Number),
    Text(String),
}

impl SeedPrice {
    /// Canonical decimal form of the price, e.g. `19.99` rather than its binary float expansion.
    fn raw(&self) -> String {
        match self {
            SeedPrice::Number(n) => n.to_string(),
            SeedPrice::Text(s) => s.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SeedRecord {
    #[serde(default)]
    retailer: String,
    #[serde(default)]
    brand: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    product_name: String,
    product_description: Option<String>,
    price: Option<SeedPrice>,
}

/// Loads seed records from `path`. A missing file yields `Ok(None)`.
pub async fn read_seed_file(path: &Path) -> Result<Option<Vec<NewProductProps>>, SeedFileError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SeedFileError::Read(e)),
    };

    parse_seed_records(&contents).map(Some)
}

pub fn parse_seed_records(json: &str) -> Result<Vec<NewProductProps>, SeedFileError> {
    let records: Vec<SeedRecord> = serde_json::from_str(json).map_err(SeedFileError::Parse)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let price = record
                .price
                .map(|p| {
                    let raw = p.raw();
                    BigDecimal::from_str(&raw)
                        .map_err(|_| SeedFileError::InvalidPrice { index, value: raw })
                })
                .transpose()?;

            Ok(NewProductProps {
                retailer: record.retailer,
                brand: record.brand,
                model: record.model,
                name: record.product_name,
                description: record.product_description,
                price,
            })
        })
        .collect()
}
