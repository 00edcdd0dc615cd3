//! Value objects for the menu domain.

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Tolerance used when comparing computed amounts.
const EPSILON: f64 = 1e-9;

/// A non-negative dollar amount.
///
/// Discounts are percentages of arbitrary precision, so amounts are kept as
/// fractional dollars and only rounded to cents for display.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(f64);

impl Money {
    /// Creates a new amount, rejecting negative or non-finite values.
    pub fn new(dollars: f64) -> Result<Self> {
        if dollars.is_finite() && dollars >= 0.0 {
            Ok(Self(dollars))
        } else {
            Err(MenuError::InvalidPrice { price: dollars })
        }
    }

    /// Creates an amount from a literal known to be valid.
    pub(crate) const fn from_dollars_unchecked(dollars: f64) -> Self {
        Self(dollars)
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the amount in dollars.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Returns the amount rounded to whole cents.
    pub fn cents(&self) -> i64 {
        (self.0 * 100.0).round() as i64
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Applies a percentage discount.
    pub fn apply_discount(&self, discount: Percent) -> Money {
        Money(self.0 * discount.factor())
    }

    /// Subtracts another amount, clamping at zero.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money((self.0 - other.0).max(0.0))
    }

    /// Returns an equal share of the amount. Zero parts yields zero.
    pub fn divide(&self, parts: usize) -> Money {
        if parts == 0 {
            return Money::zero();
        }
        Money(self.0 / parts as f64)
    }

    /// Returns true if both amounts are equal within floating point noise.
    pub fn approx_eq(&self, other: Money) -> bool {
        (self.0 - other.0).abs() < EPSILON
    }
}

impl TryFrom<f64> for Money {
    type Error = MenuError;

    fn try_from(dollars: f64) -> Result<Self> {
        Money::new(dollars)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A discount percentage in `[0, 100)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percent(f64);

impl Percent {
    /// Creates a new percentage, rejecting values outside `[0, 100)`.
    pub fn new(percent: f64) -> Result<Self> {
        if (0.0..100.0).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(MenuError::InvalidDiscount { percent })
        }
    }

    /// Returns a zero discount.
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the raw percentage value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the multiplier applied to a price, `1 - p/100`.
    pub fn factor(&self) -> f64 {
        1.0 - self.0 / 100.0
    }

    /// Returns true if no discount applies.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for Percent {
    type Error = MenuError;

    fn try_from(percent: f64) -> Result<Self> {
        Percent::new(percent)
    }
}

impl From<Percent> for f64 {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
