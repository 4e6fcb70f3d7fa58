use std::fmt;

use crate::domain::errors::ParameterError;

/// Store-assigned identity of a product. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductKey(i64);

impl ProductKey {
    pub fn new(value: i64) -> Result<Self, ParameterError> {
        if value <= 0 {
            return Err(ParameterError::InvalidKey(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parses a key as it appears in a request path.
    pub fn parse(raw: &str) -> Result<Self, ParameterError> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ParameterError::InvalidKey(raw.to_string()))?;
        Self::new(value).map_err(|_| ParameterError::InvalidKey(raw.to_string()))
    }

    /// Constructor for keys read back from the repository (no validation).
    pub fn from_repository(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_positive_key() {
        let key = ProductKey::parse("42").unwrap();
        assert_eq!(key.value(), 42);
    }

    #[test]
    fn should_reject_zero_negative_and_non_numeric_keys() {
        for raw in ["0", "-3", "abc", "", "1.5"] {
            assert_eq!(
                ProductKey::parse(raw),
                Err(ParameterError::InvalidKey(raw.to_string())),
                "{raw}"
            );
        }
    }
}
