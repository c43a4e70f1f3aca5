//! One category page: selection, totals, and order hand-off.

use maskshop_catalog::{Catalog, CategoryConfig, CategoryPage};
use maskshop_core::{Ksh, ProductId};
use maskshop_ordering::{
    DerivedTotals, OrderLink, OrderMessageComposer, SelectionState, SelectionStore, Toggle,
    compute_totals,
};

use crate::navigator::Navigator;
use crate::summary::{PageStats, PageSummary};

/// Controller for a single category page.
///
/// Owns the page's selection exclusively; a new controller (and so a new,
/// empty selection) is created on every page load. All rules are delegated to
/// `maskshop-ordering`; the controller only routes intents and opens links.
#[derive(Debug)]
pub struct PageController<N> {
    page: CategoryPage,
    selection: SelectionStore,
    guide_visible: bool,
    navigator: N,
}

impl<N: Navigator> PageController<N> {
    pub fn new(page: CategoryPage, navigator: N) -> Self {
        let guide_visible = page.config().guide_visible_by_default;
        tracing::debug!(category = %page.id(), guide_visible, "page opened");
        Self {
            page,
            selection: SelectionStore::new(),
            guide_visible,
            navigator,
        }
    }

    pub fn page(&self) -> &CategoryPage {
        &self.page
    }

    pub fn catalog(&self) -> &Catalog {
        self.page.catalog()
    }

    pub fn config(&self) -> &CategoryConfig {
        self.page.config()
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Recomputed on every call.
    pub fn totals(&self) -> DerivedTotals {
        compute_totals(self.page.catalog(), &self.selection)
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary::from_totals(self.totals())
    }

    pub fn stats(&self) -> PageStats {
        PageStats::of(self.page.catalog())
    }

    pub fn toggle(&mut self, id: &ProductId) -> Toggle {
        let outcome = self.selection.toggle(id);
        tracing::debug!(
            category = %self.page.id(),
            product = %id,
            ?outcome,
            known = self.page.catalog().contains(id),
            "selection toggled"
        );
        outcome
    }

    pub fn clear(&mut self) {
        self.selection.clear();
        tracing::debug!(category = %self.page.id(), "selection cleared");
    }

    /// "Order now" on one card. Unknown ids are a no-op.
    pub fn order_one(&mut self, id: &str) -> Option<OrderLink> {
        let Some(product) = self.page.catalog().get(id) else {
            tracing::debug!(category = %self.page.id(), product = id, "order for unknown product ignored");
            return None;
        };
        let price = product.price();
        let link = OrderMessageComposer::for_category(self.page.config()).compose_single(product);
        self.hand_off(&link, 1, price);
        Some(link)
    }

    /// "Order selected". With nothing selected this composes nothing and
    /// does not navigate.
    pub fn order_selected(&mut self) -> Option<OrderLink> {
        let composer = OrderMessageComposer::for_category(self.page.config());
        let Some(link) = composer.compose_batch(self.page.catalog(), &self.selection) else {
            tracing::debug!(category = %self.page.id(), "order with empty selection ignored");
            return None;
        };
        let totals = self.totals();
        self.hand_off(&link, totals.count, totals.total_price);
        Some(link)
    }

    pub fn guide_visible(&self) -> bool {
        self.guide_visible
    }

    pub fn show_guide(&mut self) {
        self.guide_visible = true;
    }

    pub fn hide_guide(&mut self) {
        self.guide_visible = false;
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    fn hand_off(&mut self, link: &OrderLink, items: usize, total: Ksh) {
        tracing::info!(
            category = %self.page.id(),
            items,
            total = total.amount(),
            "opening WhatsApp order"
        );
        if let Err(e) = self.navigator.open(&link.url) {
            tracing::warn!(category = %self.page.id(), error = %e, "could not open order link");
        }
    }
}
