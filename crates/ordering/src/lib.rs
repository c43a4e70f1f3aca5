//! Selection & order composition.
//!
//! This crate contains the only business rules of the storefront: which
//! products a visitor has picked, what they cost together, and how that turns
//! into a pre-filled WhatsApp message. Everything here is synchronous and
//! deterministic (no IO; opening the link is the caller's job).

pub mod encoding;
pub mod message;
pub mod pricing;
pub mod selection;

pub use encoding::{DecodeError, percent_decode, percent_encode};
pub use message::{OrderLine, OrderLink, OrderMessageComposer, OutboundOrder, deep_link};
pub use pricing::{DerivedTotals, compute_totals, selected_products};
pub use selection::{SelectionState, SelectionStore, Toggle};
