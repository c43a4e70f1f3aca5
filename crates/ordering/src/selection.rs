use std::collections::HashSet;

use maskshop_core::ProductId;

/// Outcome of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Page-level selection state machine.
///
/// `Empty -> HasSelection` on the first add; back to `Empty` when the last id
/// is removed or the store is cleared. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    HasSelection,
}

/// The set of product ids a visitor has marked for ordering.
///
/// Owned by exactly one page; never shared, never persisted. Ids that are not
/// in the page's catalogue are kept but contribute nothing to totals or
/// messages, since those always filter through the catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    ids: HashSet<ProductId>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if selected, add it otherwise.
    pub fn toggle(&mut self, id: &ProductId) -> Toggle {
        if self.ids.remove(id) {
            Toggle::Removed
        } else {
            self.ids.insert(id.clone());
            Toggle::Added
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Raw membership count, including ids unknown to any catalogue.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    pub fn state(&self) -> SelectionState {
        if self.ids.is_empty() {
            SelectionState::Empty
        } else {
            SelectionState::HasSelection
        }
    }
}

impl FromIterator<ProductId> for SelectionStore {
    fn from_iter<T: IntoIterator<Item = ProductId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut store = SelectionStore::new();
        assert_eq!(store.toggle(&id("bm-01")), Toggle::Added);
        assert!(store.is_selected("bm-01"));
        assert_eq!(store.toggle(&id("bm-01")), Toggle::Removed);
        assert!(!store.is_selected("bm-01"));
    }

    #[test]
    fn state_machine_transitions() {
        let mut store = SelectionStore::new();
        assert_eq!(store.state(), SelectionState::Empty);

        store.toggle(&id("a"));
        assert_eq!(store.state(), SelectionState::HasSelection);

        store.toggle(&id("b"));
        assert_eq!(store.state(), SelectionState::HasSelection);

        store.toggle(&id("a"));
        assert_eq!(store.state(), SelectionState::HasSelection);

        store.toggle(&id("b"));
        assert_eq!(store.state(), SelectionState::Empty);

        store.toggle(&id("c"));
        store.clear();
        assert_eq!(store.state(), SelectionState::Empty);
    }

    #[test]
    fn clear_on_empty_is_a_no_op() {
        let mut store = SelectionStore::new();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_ids_are_kept() {
        let mut store = SelectionStore::new();
        store.toggle(&id("not-in-any-catalog"));
        assert_eq!(store.len(), 1);
        assert!(store.is_selected("not-in-any-catalog"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: toggling the same id an even number of times restores
            /// its membership, whatever else happened in between.
            #[test]
            fn even_toggles_restore_membership(
                initial in proptest::collection::hash_set("[a-d]", 0..4),
                target in "[a-d]",
                noise in proptest::collection::vec("[e-h]", 0..10),
                pairs in 0usize..4,
            ) {
                let mut store: SelectionStore =
                    initial.iter().map(|s| id(s)).collect();
                let was_selected = store.is_selected(&target);
                let target_id = id(&target);

                for (i, other) in noise.iter().enumerate() {
                    store.toggle(&id(other));
                    if i < pairs * 2 {
                        store.toggle(&target_id);
                    }
                }
                for _ in (noise.len().min(pairs * 2))..(pairs * 2) {
                    store.toggle(&target_id);
                }

                prop_assert_eq!(store.is_selected(&target), was_selected);
            }

            /// Property: clear always empties the store.
            #[test]
            fn clear_always_empties(
                ids in proptest::collection::vec("[a-z]{1,4}", 0..20),
            ) {
                let mut store = SelectionStore::new();
                for s in &ids {
                    store.toggle(&id(s));
                }
                store.clear();
                prop_assert!(store.is_empty());
                prop_assert_eq!(store.state(), SelectionState::Empty);
            }
        }
    }
}
