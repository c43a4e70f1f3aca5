//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are short human-authored slugs (`"bm-01"`, `"black-lace"`), not
//! generated values, so they wrap a validated `String`.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a product, unique within one category's catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

/// Identifier of a category page (also its URL slug).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

fn validate_slug(kind: &str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::invalid_id(format!("{kind}: empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(DomainError::invalid_id(format!(
            "{kind}: `{value}` contains whitespace"
        )));
    }
    Ok(())
}

macro_rules! impl_slug_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a validated identifier (non-empty, no whitespace).
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                validate_slug($name, &value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        // Lets `HashSet<$t>` be queried with a plain `&str`.
        impl Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_slug_newtype!(ProductId, "ProductId");
impl_slug_newtype!(CategoryId, "CategoryId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slugs() {
        let id: ProductId = "bm-01".parse().unwrap();
        assert_eq!(id.as_str(), "bm-01");
        assert_eq!(id.to_string(), "bm-01");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(matches!(
            ProductId::new(""),
            Err(DomainError::InvalidId(_))
        ));
        assert!(matches!(
            CategoryId::new("black lace"),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn deserialization_validates() {
        let ok: CategoryId = serde_json::from_str("\"ski-mask\"").unwrap();
        assert_eq!(ok.as_str(), "ski-mask");
        assert!(serde_json::from_str::<CategoryId>("\"\"").is_err());
    }

    #[test]
    fn set_lookup_by_str() {
        let mut set = std::collections::HashSet::new();
        set.insert(ProductId::new("bl-01").unwrap());
        assert!(set.contains("bl-01"));
        assert!(!set.contains("bl-02"));
    }
}
