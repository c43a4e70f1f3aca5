//! Order messages and WhatsApp deep links.

use serde::Serialize;

use maskshop_catalog::{Catalog, CategoryConfig, ContactNumber, Product};
use maskshop_core::Ksh;

use crate::encoding::percent_encode;
use crate::pricing::{compute_totals, selected_products};
use crate::selection::SelectionStore;

const WHATSAPP_BASE: &str = "https://wa.me/";
const CLOSING: &str = "Please confirm availability and delivery details.";

/// One line of an outbound order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub name: String,
    pub code: String,
    pub price: Ksh,
}

impl From<&Product> for OrderLine {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            code: product.code().to_string(),
            price: product.price(),
        }
    }
}

impl core::fmt::Display for OrderLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({}) - {}", self.name, self.code, self.price)
    }
}

/// The products being ordered at the moment an order action fires.
///
/// Built on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundOrder {
    pub lines: Vec<OrderLine>,
    pub total: Ksh,
}

impl OutboundOrder {
    /// Selected catalogue products in catalogue order; `None` when nothing in
    /// the catalogue is selected.
    pub fn from_selection(catalog: &Catalog, selection: &SelectionStore) -> Option<Self> {
        let totals = compute_totals(catalog, selection);
        if totals.count == 0 {
            return None;
        }
        Some(Self {
            lines: selected_products(catalog, selection)
                .map(OrderLine::from)
                .collect(),
            total: totals.total_price,
        })
    }
}

/// A composed message and the link that opens it in WhatsApp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLink {
    pub text: String,
    pub url: String,
}

/// `https://wa.me/{digits}?text={percent-encoded text}`.
pub fn deep_link(contact: &ContactNumber, text: &str) -> String {
    format!(
        "{WHATSAPP_BASE}{}?text={}",
        contact.digits(),
        percent_encode(text)
    )
}

/// Composes order messages for one category.
#[derive(Debug, Clone, Copy)]
pub struct OrderMessageComposer<'a> {
    contact: &'a ContactNumber,
    label: &'a str,
}

impl<'a> OrderMessageComposer<'a> {
    pub fn new(contact: &'a ContactNumber, label: &'a str) -> Self {
        Self { contact, label }
    }

    pub fn for_category(config: &'a CategoryConfig) -> Self {
        Self::new(&config.contact, &config.label)
    }

    pub fn single_text(product: &Product) -> String {
        format!(
            "Hi! I'd like to order {} ({}) for {}. {CLOSING}",
            product.name(),
            product.code(),
            product.price()
        )
    }

    pub fn batch_text(&self, order: &OutboundOrder) -> String {
        let items = order
            .lines
            .iter()
            .map(OrderLine::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "Hi! I'd like to order the following {} masks:\n\n{items}\n\nTotal: {}\n\n{CLOSING}",
            self.label, order.total
        )
    }

    /// "Order now" on a single product card.
    pub fn compose_single(&self, product: &Product) -> OrderLink {
        let text = Self::single_text(product);
        OrderLink {
            url: deep_link(self.contact, &text),
            text,
        }
    }

    /// "Order selected": `None` when the selection holds no catalogue product,
    /// in which case the caller must not navigate.
    pub fn compose_batch(&self, catalog: &Catalog, selection: &SelectionStore) -> Option<OrderLink> {
        let order = OutboundOrder::from_selection(catalog, selection)?;
        let text = self.batch_text(&order);
        Some(OrderLink {
            url: deep_link(self.contact, &text),
            text,
        })
    }
}
