//! Category routing over the configured pages.

use std::collections::HashSet;

use maskshop_catalog::{CategoryCard, CategoryPage, ContactNumber, collections, landing_index};
use maskshop_core::{DomainError, DomainResult};

use crate::controller::PageController;
use crate::navigator::Navigator;

/// The set of category pages a host can navigate to.
///
/// Pages are templates: [`Storefront::open`] hands out a fresh controller with
/// an empty selection every time, so no selection is ever shared between page
/// loads.
#[derive(Debug, Clone)]
pub struct Storefront {
    pages: Vec<CategoryPage>,
}

impl Storefront {
    /// The built-in collections.
    pub fn builtin() -> DomainResult<Self> {
        Self::from_pages(collections::builtin_pages()?)
    }

    pub fn from_pages(pages: Vec<CategoryPage>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for page in &pages {
            if !seen.insert(page.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate category id `{}`",
                    page.id()
                )));
            }
        }
        Ok(Self { pages })
    }

    /// Route every category's orders to one contact.
    pub fn with_contact(self, contact: ContactNumber) -> Self {
        Self {
            pages: self
                .pages
                .into_iter()
                .map(|page| page.with_contact(contact.clone()))
                .collect(),
        }
    }

    pub fn pages(&self) -> &[CategoryPage] {
        &self.pages
    }

    pub fn page(&self, id: &str) -> DomainResult<&CategoryPage> {
        self.pages
            .iter()
            .find(|p| p.id().as_str() == id)
            .ok_or_else(|| DomainError::not_found(format!("category `{id}`")))
    }

    /// Load a category page with an empty selection.
    pub fn open<N: Navigator>(&self, id: &str, navigator: N) -> DomainResult<PageController<N>> {
        let page = self.page(id)?.clone();
        Ok(PageController::new(page, navigator))
    }

    /// Landing-page cards, linked to whichever pages this storefront has.
    pub fn index(&self) -> DomainResult<Vec<CategoryCard>> {
        let mut cards = landing_index()?;
        for card in &mut cards {
            card.has_page = self.pages.iter().any(|p| p.id() == &card.id);
        }
        Ok(cards)
    }
}
