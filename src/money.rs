use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Money type in whole rupees, exact integer arithmetic throughout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// create from whole rupees
    pub const fn from_rupees(amount: u64) -> Self {
        Money(amount)
    }

    /// get underlying amount in rupees
    pub const fn rupees(&self) -> u64 {
        self.0
    }

    /// check if zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// minimum of two values
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// subtraction clamped at zero
    pub fn saturating_sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }

    /// integer percentage, truncated toward zero
    pub fn percentage_floor(&self, percent: u64) -> Self {
        let raw = u128::from(self.0) * u128::from(percent) / 100;
        Money(u64::try_from(raw).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Money::from_rupees(amount)
    }
}

impl From<u32> for Money {
    fn from(amount: u32) -> Self {
        Money::from_rupees(u64::from(amount))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_floor() {
        let amount = Money::from_rupees(200);
        assert_eq!(amount.percentage_floor(10), Money::from_rupees(20));

        // truncates toward zero
        let amount = Money::from_rupees(199);
        assert_eq!(amount.percentage_floor(10), Money::from_rupees(19));

        let amount = Money::from_rupees(33);
        assert_eq!(amount.percentage_floor(15), Money::from_rupees(4));
    }

    #[test]
    fn test_percentage_floor_large_amount() {
        // intermediate product exceeds u64 without widening
        let amount = Money::from_rupees(u64::MAX / 2);
        assert_eq!(amount.percentage_floor(100), amount);
    }

    #[test]
    fn test_saturating_sub() {
        let a = Money::from_rupees(20);
        let b = Money::from_rupees(30);
        assert_eq!(a.saturating_sub(b), Money::ZERO);
        assert_eq!(b.saturating_sub(a), Money::from_rupees(10));
    }

    #[test]
    fn test_min_max() {
        let a = Money::from_rupees(15);
        let b = Money::from_rupees(20);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_sum() {
        let total: Money = [10_u64, 20, 50]
            .iter()
            .map(|&r| Money::from_rupees(r))
            .sum();
        assert_eq!(total, Money::from_rupees(80));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupees(199).to_string(), "₹199");
    }
}
