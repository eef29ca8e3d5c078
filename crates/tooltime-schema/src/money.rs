//! Money in whole cents.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// An amount of money in US cents.
///
/// All rental arithmetic happens in whole cents so charges never pick up
/// floating point error. Rendering to dollars is done by [`fmt::Display`].
///
/// # Example
///
/// ```
/// use tooltime_schema::Cents;
///
/// assert_eq!(Cents::new(179_400).to_string(), "$1,794.00");
/// assert_eq!(Cents::new(29).to_string(), "$0.29");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(u64);

impl Cents {
    /// Zero dollars.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a number of cents.
    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Return the raw number of cents.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whole-cent share of this amount at `percent` percent.
    ///
    /// Fractions of a cent are dropped, so 10% of $2.98 is $0.29 and
    /// 50% of $2.99 is $1.49.
    pub fn percent_of(self, percent: u32) -> Self {
        let share = u128::from(self.0) * u128::from(percent) / 100;
        Self(share as u64)
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// Saturates at zero; a charge can't go negative.
impl Sub for Cents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<u32> for Cents {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * u64::from(rhs))
    }
}

impl From<u64> for Cents {
    fn from(cents: u64) -> Self {
        Self(cents)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = (self.0 / 100).to_formatted_string(&Locale::en);
        let cents = self.0 % 100;
        write!(f, "${dollars}.{cents:02}")
    }
}
