use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use maskshop_core::{DomainError, DomainResult, Ksh, ProductId, ValueObject, entity::ensure_unique_ids};

use crate::product::Product;

/// The ordered, immutable list of products for one category.
///
/// Invariants (checked once, in [`Catalog::new`]):
/// - every product passes [`Product::validate`];
/// - product ids are unique;
/// - product codes are unique.
///
/// Catalogue order is the canonical display and message order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        for product in &products {
            product.validate()?;
        }
        ensure_unique_ids("product", &products)?;

        let mut codes = HashSet::new();
        for product in &products {
            if !codes.insert(product.code()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product code `{}`",
                    product.code()
                )));
            }
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed().as_str() == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id.as_str()).is_some()
    }

    /// Lowest and highest price on the page, for the stats header.
    pub fn price_band(&self) -> Option<PriceBand> {
        let min = self.products.iter().map(Product::price).min()?;
        let max = self.products.iter().map(Product::price).max()?;
        Some(PriceBand { min, max })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = DomainError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Self::new(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}

/// Price range of a catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    pub min: Ksh,
    pub max: Ksh,
}

impl PriceBand {
    pub fn is_uniform(&self) -> bool {
        self.min == self.max
    }
}

impl ValueObject for PriceBand {}

/// `KSH 500` for a uniform band, `KSH 500-600` otherwise.
impl core::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_uniform() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max.amount())
        }
    }
}
