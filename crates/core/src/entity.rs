//! Entity trait: records that are told apart by identifier, not by value.

use std::collections::HashSet;

use crate::error::{DomainError, DomainResult};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Reject a collection in which two entities share an identifier.
///
/// `kind` names the entity in the error message (e.g. `"product"`).
pub fn ensure_unique_ids<'a, E, I>(kind: &str, entities: I) -> DomainResult<()>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen = HashSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(DomainError::invariant(format!(
                "duplicate {kind} id `{}`",
                entity.id()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Entity for Named {
        type Id = &'static str;

        fn id(&self) -> &Self::Id {
            &self.0
        }
    }

    #[test]
    fn unique_ids_pass() {
        let items = [Named("a"), Named("b")];
        assert!(ensure_unique_ids("thing", &items).is_ok());
    }

    #[test]
    fn duplicate_ids_are_an_invariant_violation() {
        let items = [Named("a"), Named("b"), Named("a")];
        let err = ensure_unique_ids("thing", &items).unwrap_err();
        assert_eq!(err, DomainError::invariant("duplicate thing id `a`"));
    }
}
