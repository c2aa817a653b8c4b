// crates/shared-kernel/src/value_objects/counts.rs
use std::{iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

/// Number of occurrences of a key in a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frequency(usize);

impl Frequency {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Bump the count by one, saturating at `usize::MAX`.
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::zero()
    }
}

/// 1-based position of a line within an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineNumber(usize);

impl LineNumber {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn first() -> Self {
        Self(1)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Number of the line following this one.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for LineNumber {
    fn default() -> Self {
        Self::first()
    }
}

macro_rules! count_arithmetic {
    ($ty:ident) => {
        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl From<usize> for $ty {
            fn from(value: usize) -> Self {
                Self::new(value)
            }
        }

        impl PartialEq<usize> for $ty {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }
    };
}

count_arithmetic!(Frequency);
count_arithmetic!(LineNumber);

impl Sum for Frequency {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Frequency> for Frequency {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

mod display {
    use std::fmt;

    use super::{Frequency, LineNumber};

    impl fmt::Display for Frequency {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }

    impl fmt::Display for LineNumber {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_saturates() {
        let mut freq = Frequency::new(usize::MAX);
        freq.increment();
        assert_eq!(freq, usize::MAX);
    }

    #[test]
    fn line_number_starts_at_one() {
        let first = LineNumber::default();
        assert_eq!(first, 1usize);
        assert_eq!(first.next().value(), 2);
    }
}
