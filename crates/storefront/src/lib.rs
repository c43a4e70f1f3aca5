//! `maskshop-storefront`
//!
//! **Responsibility:** the page layer of the mask catalogue.
//!
//! This crate provides:
//! - `PageController`: one category page's selection and order actions
//! - `Navigator`: the host's "open this link" collaborator
//! - `Storefront`: category routing over the configured pages
//! - hosts: a CLI (native) and a Leptos frontend (wasm32)
//!
//! Business rules live in `maskshop-ordering`; this crate only delegates.

pub mod controller;
pub mod navigator;
pub mod storefront;
pub mod summary;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use controller::PageController;
pub use navigator::{NavigationError, Navigator, RecordingNavigator, WriteNavigator};
pub use storefront::Storefront;
pub use summary::{PageStats, PageSummary};
