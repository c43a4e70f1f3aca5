//! Catalogue domain module.
//!
//! This crate contains the product records for each mask category, the
//! per-category configuration constants, and the landing-page category index.
//! Everything here is immutable once built (no IO beyond optional JSON loading).

pub mod catalog;
pub mod category;
pub mod collections;
pub mod index;
pub mod load;
pub mod product;

pub use catalog::{Catalog, PriceBand};
pub use category::{CategoryConfig, CategoryPage, ContactNumber};
pub use index::{CategoryCard, landing_index};
pub use load::{CatalogLoadError, load_pages, parse_pages};
pub use product::{DisplayTags, Product};
