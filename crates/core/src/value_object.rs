//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; to
/// "change" one, build a new one. `Ksh` is the canonical example here:
/// two `KSH 500` amounts are the same amount wherever they come from.
///
/// Products, in contrast, are entities (see [`crate::Entity`]): two catalogue
/// entries are the same product only when they share an id.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
