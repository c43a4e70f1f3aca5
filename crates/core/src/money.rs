//! Kenyan shilling amounts.

use core::iter::Sum;
use core::ops::{Add, AddAssign};
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A whole-shilling amount. Catalogue prices carry no decimals.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ksh(u64);

impl Ksh {
    pub const ZERO: Ksh = Ksh(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }
}

impl ValueObject for Ksh {}

/// Renders as it appears in order messages: `KSH 500`.
impl core::fmt::Display for Ksh {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "KSH {}", self.0)
    }
}

impl From<u64> for Ksh {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Add for Ksh {
    type Output = Ksh;

    fn add(self, rhs: Ksh) -> Ksh {
        Ksh(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Ksh {
    fn add_assign(&mut self, rhs: Ksh) {
        *self = *self + rhs;
    }
}

impl Sum for Ksh {
    fn sum<I: Iterator<Item = Ksh>>(iter: I) -> Ksh {
        iter.fold(Ksh::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Ksh> for Ksh {
    fn sum<I: Iterator<Item = &'a Ksh>>(iter: I) -> Ksh {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_currency_prefix() {
        assert_eq!(Ksh::new(1200).to_string(), "KSH 1200");
        assert_eq!(Ksh::ZERO.to_string(), "KSH 0");
    }

    #[test]
    fn sums_amounts() {
        let total: Ksh = [Ksh::new(500), Ksh::new(600), Ksh::new(500)].iter().sum();
        assert_eq!(total, Ksh::new(1600));
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: Ksh = std::iter::empty::<Ksh>().sum();
        assert_eq!(total, Ksh::ZERO);
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Ksh::new(500)).unwrap(), "500");
    }
}
