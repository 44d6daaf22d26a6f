//! Dimension limit for factorial-cost expansion.
//!
//! Laplace expansion costs O(n!) and recurses n levels deep, so every entry
//! point checks the side length against a [`DimensionLimit`] first.

use crate::LimitError;

/// Upper bound on the side of a matrix accepted for expansion.
///
/// Values are in `1..=CEILING` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimensionLimit(usize);

impl DimensionLimit {
    /// Default bound: a 10×10 adjugate is ~10^8 multiplications.
    pub const DEFAULT: usize = 10;
    /// Hard bound. 13! expansions take minutes even for integers.
    pub const CEILING: usize = 12;

    pub fn new(value: usize) -> Result<Self, LimitError> {
        if value == 0 {
            return Err(LimitError::Zero);
        }
        if value > Self::CEILING {
            return Err(LimitError::AboveCeiling {
                requested: value,
                ceiling: Self::CEILING,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn ceiling() -> Self {
        Self(Self::CEILING)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn admits(self, side: usize) -> bool {
        side <= self.0
    }
}

impl Default for DimensionLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::DimensionLimit;
    use crate::LimitError;

    #[test]
    fn rejects_zero() {
        assert_eq!(DimensionLimit::new(0), Err(LimitError::Zero));
    }

    #[test]
    fn rejects_above_ceiling() {
        assert_eq!(
            DimensionLimit::new(13),
            Err(LimitError::AboveCeiling {
                requested: 13,
                ceiling: 12
            })
        );
    }

    #[test]
    fn accepts_range() {
        assert_eq!(DimensionLimit::new(1).unwrap().get(), 1);
        assert_eq!(DimensionLimit::new(12).unwrap().get(), 12);
    }

    #[test]
    fn ceiling_is_largest_valid_limit() {
        assert_eq!(DimensionLimit::ceiling(), DimensionLimit::new(12).unwrap());
        assert!(DimensionLimit::ceiling().admits(12));
    }

    #[test]
    fn default_admits_ten_not_eleven() {
        let limit = DimensionLimit::default();
        assert!(limit.admits(10));
        assert!(!limit.admits(11));
    }
}
