use maskshop_catalog::{ContactNumber, parse_pages};
use maskshop_core::{Ksh, ProductId};
use maskshop_ordering::{SelectionState, percent_decode};
use maskshop_storefront::{RecordingNavigator, Storefront};

const CATALOGUE: &str = r#"{
  "categories": [
    {
      "config": {
        "id": "test-masks",
        "title": "TEST MASKS",
        "label": "Test",
        "contact": "+254700000001"
      },
      "products": [
        { "id": "a", "name": "Red Mask", "code": "BM-01", "price": 500 },
        { "id": "b", "name": "Black Mask", "code": "BM-02", "price": 500 },
        { "id": "c", "name": "Gold Mask", "code": "BM-03", "price": 600 }
      ]
    }
  ]
}"#;

fn id(s: &str) -> ProductId {
    ProductId::new(s).unwrap()
}

fn store() -> Storefront {
    Storefront::from_pages(parse_pages(CATALOGUE).unwrap()).unwrap()
}

fn text_param(url: &str) -> String {
    let (_, encoded) = url.split_once("?text=").unwrap();
    percent_decode(encoded).unwrap()
}

#[test]
fn batch_order_lists_catalogue_order_and_total() {
    let store = store();
    let mut page = store.open("test-masks", RecordingNavigator::new()).unwrap();
    page.toggle(&id("b"));
    page.toggle(&id("a"));

    let link = page.order_selected().unwrap();
    assert_eq!(
        link.text,
        "Hi! I'd like to order the following Test masks:\n\n\
         Red Mask (BM-01) - KSH 500\n\
         Black Mask (BM-02) - KSH 500\n\n\
         Total: KSH 1000\n\n\
         Please confirm availability and delivery details."
    );
    assert!(link.url.starts_with("https://wa.me/254700000001?text="));
    assert_eq!(text_param(&link.url), link.text);
    assert_eq!(page.navigator().opened(), [link.url]);
}

#[test]
fn empty_selection_never_navigates() {
    let store = store();
    let mut page = store.open("test-masks", RecordingNavigator::new()).unwrap();
    assert!(page.order_selected().is_none());

    // Only ids outside the catalogue: selection is non-empty but nothing to order.
    page.toggle(&id("zz"));
    assert_eq!(page.state(), SelectionState::HasSelection);
    assert_eq!(page.totals().count, 0);
    assert!(page.order_selected().is_none());

    assert!(page.into_navigator().opened().is_empty());
}

#[test]
fn single_order_url_decodes_to_exact_text() {
    let store = Storefront::builtin().unwrap();
    let mut page = store.open("basic-masks", RecordingNavigator::new()).unwrap();

    let link = page.order_one("bm-01").unwrap();
    let expected = "Hi! I'd like to order Red Party Mask (BM-01) for KSH 500. \
                    Please confirm availability and delivery details.";
    assert_eq!(link.text, expected);
    assert_eq!(text_param(&link.url), expected);
    // A single order leaves the selection alone.
    assert_eq!(page.state(), SelectionState::Empty);
}

#[test]
fn clear_always_zeroes_totals() {
    let store = store();
    let mut page = store.open("test-masks", RecordingNavigator::new()).unwrap();
    for raw in ["a", "c", "zz", "a", "b"] {
        page.toggle(&id(raw));
    }
    assert_eq!(page.totals().total_price, Ksh::new(1100));

    page.clear();
    assert_eq!(page.totals().count, 0);
    assert_eq!(page.totals().total_price, Ksh::ZERO);
    assert!(!page.summary().is_visible());
}

#[test]
fn contact_override_reaches_the_link() {
    let contact = ContactNumber::new("+254711222333").unwrap();
    let store = Storefront::builtin().unwrap().with_contact(contact);
    let mut page = store.open("ski-mask", RecordingNavigator::new()).unwrap();

    let link = page.order_one("sm-01").unwrap();
    assert!(link.url.starts_with("https://wa.me/254711222333?text="));
}

#[test]
fn builtin_pages_route_to_their_own_contacts() {
    let store = Storefront::builtin().unwrap();
    let contact_of = |category: &str| {
        let mut page = store.open(category, RecordingNavigator::new()).unwrap();
        let first = page.catalog().products()[0].id_typed().to_string();
        let url = page.order_one(&first).unwrap().url;
        url.trim_start_matches("https://wa.me/")
            .split('?')
            .next()
            .unwrap()
            .to_string()
    };

    assert_eq!(contact_of("basic-masks"), "254719338534");
    assert_eq!(contact_of("lower-face"), "254746627718");
}
