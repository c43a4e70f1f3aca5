//! Totals derived from a catalogue and a selection.
//!
//! Nothing here is cached: every call walks the catalogue again, so totals can
//! never drift from the selection they describe.

use serde::Serialize;

use maskshop_catalog::{Catalog, Product};
use maskshop_core::Ksh;

use crate::selection::SelectionStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivedTotals {
    /// Selected products that exist in the catalogue.
    pub count: usize,
    pub total_price: Ksh,
}

/// Selected products, in catalogue order.
pub fn selected_products<'a>(
    catalog: &'a Catalog,
    selection: &'a SelectionStore,
) -> impl Iterator<Item = &'a Product> + 'a {
    catalog
        .iter()
        .filter(move |p| selection.is_selected(p.id_typed().as_str()))
}

pub fn compute_totals(catalog: &Catalog, selection: &SelectionStore) -> DerivedTotals {
    selected_products(catalog, selection).fold(DerivedTotals::default(), |acc, p| DerivedTotals {
        count: acc.count + 1,
        total_price: acc.total_price + p.price(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use maskshop_core::ProductId;

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    fn catalog(prices: &[u64]) -> Catalog {
        Catalog::new(
            prices
                .iter()
                .enumerate()
                .map(|(i, price)| {
                    Product::new(
                        id(&format!("p{i}")),
                        format!("Mask {i}"),
                        format!("M-{i:02}"),
                        Ksh::new(*price),
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_selection_totals_zero() {
        let totals = compute_totals(&catalog(&[500, 600]), &SelectionStore::new());
        assert_eq!(totals, DerivedTotals::default());
    }

    #[test]
    fn sums_selected_prices() {
        let catalog = catalog(&[500, 600, 500]);
        let selection: SelectionStore = [id("p0"), id("p1")].into_iter().collect();
        let totals = compute_totals(&catalog, &selection);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.total_price, Ksh::new(1100));
    }

    #[test]
    fn unknown_ids_contribute_nothing() {
        let catalog = catalog(&[500]);
        let selection: SelectionStore = [id("p0"), id("ghost")].into_iter().collect();
        let totals = compute_totals(&catalog, &selection);
        assert_eq!(selection.len(), 2);
        assert_eq!(totals.count, 1);
        assert_eq!(totals.total_price, Ksh::new(500));
    }

    #[test]
    fn selected_products_follow_catalogue_order() {
        let catalog = catalog(&[1, 2, 3, 4]);
        let mut selection = SelectionStore::new();
        selection.toggle(&id("p3"));
        selection.toggle(&id("p0"));
        selection.toggle(&id("p2"));
        let codes: Vec<_> = selected_products(&catalog, &selection)
            .map(Product::code)
            .collect();
        assert_eq!(codes, ["M-00", "M-02", "M-03"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: after every toggle, totals equal the sum over the
            /// catalogue filtered by membership.
            #[test]
            fn totals_match_filtered_sum(
                prices in proptest::collection::vec(0u64..5_000, 0..12),
                toggles in proptest::collection::vec(0usize..16, 0..40),
            ) {
                let catalog = catalog(&prices);
                let mut selection = SelectionStore::new();

                for t in toggles {
                    selection.toggle(&id(&format!("p{t}")));

                    let expected_total: u64 = catalog
                        .iter()
                        .filter(|p| selection.is_selected(p.id_typed().as_str()))
                        .map(|p| p.price().amount())
                        .sum();
                    let expected_count = catalog
                        .iter()
                        .filter(|p| selection.is_selected(p.id_typed().as_str()))
                        .count();

                    let totals = compute_totals(&catalog, &selection);
                    prop_assert_eq!(totals.total_price, Ksh::new(expected_total));
                    prop_assert_eq!(totals.count, expected_count);
                }

                selection.clear();
                prop_assert_eq!(compute_totals(&catalog, &selection), DerivedTotals::default());
            }
        }
    }
}
