//! Read-only projections the rendering layer shows.

use serde::Serialize;

use maskshop_catalog::{Catalog, PriceBand};
use maskshop_core::Ksh;
use maskshop_ordering::DerivedTotals;

/// The floating "N masks selected / KSH total" bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub count: usize,
    pub total_price: Ksh,
    pub label: String,
}

impl PageSummary {
    pub fn from_totals(totals: DerivedTotals) -> Self {
        Self {
            count: totals.count,
            total_price: totals.total_price,
            label: selection_label(totals.count),
        }
    }

    /// The bar is hidden while nothing is selected.
    pub fn is_visible(&self) -> bool {
        self.count > 0
    }
}

/// `"1 mask selected"`, `"3 masks selected"`.
pub fn selection_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} mask{plural} selected")
}

/// The stats header above the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    pub designs: usize,
    pub price: Option<PriceBand>,
}

impl PageStats {
    pub fn of(catalog: &Catalog) -> Self {
        Self {
            designs: catalog.len(),
            price: catalog.price_band(),
        }
    }

    /// `"Each Mask"` for a uniform price, `"Price Range"` otherwise.
    pub fn price_caption(&self) -> &'static str {
        match self.price {
            Some(band) if !band.is_uniform() => "Price Range",
            _ => "Each Mask",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_pluralize() {
        assert_eq!(selection_label(0), "0 masks selected");
        assert_eq!(selection_label(1), "1 mask selected");
        assert_eq!(selection_label(4), "4 masks selected");
    }

    #[test]
    fn summary_visibility_follows_count() {
        let empty = PageSummary::from_totals(DerivedTotals::default());
        assert!(!empty.is_visible());

        let some = PageSummary::from_totals(DerivedTotals {
            count: 2,
            total_price: Ksh::new(1000),
        });
        assert!(some.is_visible());
        assert_eq!(some.label, "2 masks selected");
    }

    #[test]
    fn stats_caption() {
        let phantom = maskshop_catalog::collections::builtin_page("phantom-half-face").unwrap();
        let stats = PageStats::of(phantom.catalog());
        assert_eq!(stats.designs, 9);
        assert_eq!(stats.price_caption(), "Price Range");

        let basic = maskshop_catalog::collections::builtin_page("basic-masks").unwrap();
        assert_eq!(PageStats::of(basic.catalog()).price_caption(), "Each Mask");
    }
}
