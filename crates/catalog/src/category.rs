//! Per-category configuration constants.

use serde::{Deserialize, Serialize};

use maskshop_core::{CategoryId, DomainError, DomainResult, ValueObject};

use crate::catalog::Catalog;

/// The outbound WhatsApp contact for a category, e.g. `+254719338534`.
///
/// Stored as configured; [`ContactNumber::digits`] is what goes into a deep link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Accepts an optional leading `+` followed by 7 to 15 digits (E.164 length).
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let digits = value.strip_prefix('+').unwrap_or(&value);
        if !(7..=15).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "contact number `{value}` must be 7-15 digits with an optional leading `+`"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// International digits without the `+`.
    pub fn digits(&self) -> &str {
        self.0.strip_prefix('+').unwrap_or(&self.0)
    }
}

impl ValueObject for ContactNumber {}

impl core::fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ContactNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContactNumber> for String {
    fn from(value: ContactNumber) -> Self {
        value.0
    }
}

/// Constants that distinguish one category page from another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub id: CategoryId,
    /// Page heading, e.g. `BASIC MASKS`.
    pub title: String,
    /// Sub-heading, e.g. `Simple Collection`.
    #[serde(default)]
    pub tagline: String,
    /// Word(s) used in batch order messages: "the following {label} masks".
    pub label: String,
    pub contact: ContactNumber,
    /// Whether the selection guide modal is open when the page loads.
    #[serde(default)]
    pub guide_visible_by_default: bool,
}

impl CategoryConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if self.label.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "category `{}`: label cannot be empty",
                self.id
            )));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "category `{}`: title cannot be empty",
                self.id
            )));
        }
        Ok(())
    }
}

/// A category's configuration together with its catalogue.
///
/// Deserialize through [`crate::load`], which runs the same validation as
/// [`CategoryPage::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPage {
    config: CategoryConfig,
    catalog: Catalog,
}

impl CategoryPage {
    pub fn new(config: CategoryConfig, catalog: Catalog) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self { config, catalog })
    }

    pub fn id(&self) -> &CategoryId {
        &self.config.id
    }

    pub fn config(&self) -> &CategoryConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the outbound contact, keeping everything else.
    pub fn with_contact(mut self, contact: ContactNumber) -> Self {
        self.config.contact = contact;
        self
    }
}
