//! `maskshop-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId};
pub use money::Ksh;
pub use value_object::ValueObject;
