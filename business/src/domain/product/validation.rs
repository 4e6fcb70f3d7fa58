use std::fmt;

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;

use super::model::NewProductProps;

/// Field names as they appear on the wire.
pub mod fields {
    pub const RETAILER: &str = "retailer";
    pub const BRAND: &str = "brand";
    pub const MODEL: &str = "model";
    pub const NAME: &str = "product_name";
    pub const DESCRIPTION: &str = "product_description";
    pub const PRICE: &str = "price";
}

const SHORT_TEXT_MAX: usize = 100;
const NAME_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 1000;
const PRICE_INTEGER_DIGITS: u64 = 6;
const PRICE_FRACTION_DIGITS: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Every field that failed validation, in declaration order, one entry per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn single(field: &'static str, message: &str) -> Self {
        Self(vec![FieldViolation {
            field,
            message: message.to_string(),
        }])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|v| v.field).collect()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }

    fn push(&mut self, field: &'static str, message: Option<String>) {
        if let Some(message) = message {
            self.0.push(FieldViolation { field, message });
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks every field constraint of a product without altering the input.
pub fn validate(props: &NewProductProps) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    errors.push(
        fields::RETAILER,
        required_text(&props.retailer, "Retailer", SHORT_TEXT_MAX),
    );
    errors.push(
        fields::BRAND,
        required_text(&props.brand, "Brand", SHORT_TEXT_MAX),
    );
    errors.push(
        fields::MODEL,
        required_text(&props.model, "Model", SHORT_TEXT_MAX),
    );
    errors.push(
        fields::NAME,
        required_text(&props.name, "Product name", NAME_MAX),
    );
    errors.push(
        fields::DESCRIPTION,
        props
            .description
            .as_deref()
            .filter(|d| d.chars().count() > DESCRIPTION_MAX)
            .map(|_| format!("Product description cannot exceed {DESCRIPTION_MAX} characters")),
    );
    errors.push(fields::PRICE, price_violation(props.price.as_ref()));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn required_text(value: &str, label: &str, max: usize) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{label} is required"));
    }
    if value.chars().count() > max {
        return Some(format!("{label} must be between 1 and {max} characters"));
    }
    None
}

fn price_violation(price: Option<&BigDecimal>) -> Option<String> {
    let Some(price) = price else {
        return Some("Price is required".to_string());
    };

    // 0.01 and 999999.99
    let min = BigDecimal::new(BigInt::from(1), 2);
    let max = BigDecimal::new(BigInt::from(99_999_999), 2);

    if price < &min {
        return Some("Price must be at least 0.01".to_string());
    }
    if price > &max {
        return Some("Price cannot exceed 999,999.99".to_string());
    }

    let (_, scale) = price.normalized().as_bigint_and_exponent();
    let integer_digits = price.abs().with_scale(0).digits();
    if scale > PRICE_FRACTION_DIGITS || integer_digits > PRICE_INTEGER_DIGITS {
        return Some("Price must have up to 6 digits before decimal and 2 after".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use proptest::prelude::*;

    use super::*;

    fn props() -> NewProductProps {
        NewProductProps {
            retailer: "Best Buy".to_string(),
            brand: "Sony".to_string(),
            model: "WH-1000XM5".to_string(),
            name: "Wireless Headphones".to_string(),
            description: Some("Noise cancelling".to_string()),
            price: Some(BigDecimal::from_str("349.99").unwrap()),
        }
    }

    fn price(raw: &str) -> Option<BigDecimal> {
        Some(BigDecimal::from_str(raw).unwrap())
    }

    #[test]
    fn should_accept_valid_product() {
        assert!(validate(&props()).is_ok());
    }

    #[test]
    fn should_accept_missing_description() {
        let p = NewProductProps {
            description: None,
            ..props()
        };
        assert!(validate(&p).is_ok());
    }

    #[test]
    fn should_report_every_blank_required_field() {
        let p = NewProductProps {
            retailer: "".to_string(),
            brand: "   ".to_string(),
            model: "".to_string(),
            name: "\t".to_string(),
            description: None,
            price: None,
        };

        let errors = validate(&p).unwrap_err();

        assert_eq!(
            errors.fields(),
            vec!["retailer", "brand", "model", "product_name", "price"]
        );
        assert_eq!(errors.message_for("retailer"), Some("Retailer is required"));
        assert_eq!(
            errors.message_for("product_name"),
            Some("Product name is required")
        );
        assert_eq!(errors.message_for("price"), Some("Price is required"));
    }

    #[test]
    fn should_reject_text_longer_than_limits() {
        let p = NewProductProps {
            brand: "b".repeat(101),
            name: "n".repeat(201),
            description: Some("d".repeat(1001)),
            ..props()
        };

        let errors = validate(&p).unwrap_err();

        assert_eq!(
            errors.fields(),
            vec!["brand", "product_name", "product_description"]
        );
        assert_eq!(
            errors.message_for("brand"),
            Some("Brand must be between 1 and 100 characters")
        );
        assert_eq!(
            errors.message_for("product_description"),
            Some("Product description cannot exceed 1000 characters")
        );
    }

    #[test]
    fn should_count_characters_not_bytes() {
        let p = NewProductProps {
            model: "é".repeat(100),
            ..props()
        };
        assert!(validate(&p).is_ok());
    }

    #[test]
    fn should_reject_negative_and_zero_price() {
        for raw in ["-5", "0", "0.00", "0.009"] {
            let p = NewProductProps {
                price: price(raw),
                ..props()
            };
            let errors = validate(&p).unwrap_err();
            assert_eq!(
                errors.message_for("price"),
                Some("Price must be at least 0.01"),
                "{raw}"
            );
        }
    }

    #[test]
    fn should_reject_price_above_maximum() {
        let p = NewProductProps {
            price: price("1000000"),
            ..props()
        };
        assert_eq!(
            validate(&p).unwrap_err().message_for("price"),
            Some("Price cannot exceed 999,999.99")
        );
    }

    #[test]
    fn should_reject_more_than_two_fraction_digits() {
        let p = NewProductProps {
            price: price("19.999"),
            ..props()
        };
        assert_eq!(
            validate(&p).unwrap_err().message_for("price"),
            Some("Price must have up to 6 digits before decimal and 2 after")
        );
    }

    #[test]
    fn should_accept_trailing_zero_fraction_digits() {
        let p = NewProductProps {
            price: price("19.9000"),
            ..props()
        };
        assert!(validate(&p).is_ok());
    }

    #[test]
    fn should_accept_price_bounds() {
        for raw in ["0.01", "999999.99"] {
            let p = NewProductProps {
                price: price(raw),
                ..props()
            };
            assert!(validate(&p).is_ok(), "{raw}");
        }
    }

    proptest! {
        #[test]
        fn should_accept_any_price_in_cents_within_range(cents in 1i64..=99_999_999) {
            let p = NewProductProps {
                price: Some(BigDecimal::new(BigInt::from(cents), 2)),
                ..props()
            };
            prop_assert!(validate(&p).is_ok());
        }

        #[test]
        fn should_accept_names_within_length(name in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,199}") {
            let p = NewProductProps { name, ..props() };
            prop_assert!(validate(&p).is_ok());
        }

        #[test]
        fn should_reject_names_over_length(name in "[a-z]{201,300}") {
            let p = NewProductProps { name, ..props() };
            let errors = validate(&p).unwrap_err();
            prop_assert_eq!(errors.fields(), vec!["product_name"]);
        }
    }
}
