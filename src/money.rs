//! Whole-dollar amounts.
//!
//! Hours and rates are integral, so payouts never need fractional cents. The
//! amount is kept as a wide signed integer and rendered as `$` followed by the
//! decimal digits, with no thousands separators.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A whole-dollar amount formatted as `$<n>`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use payout_report::Dollars;
///
/// let amount = Dollars::from_str("$8000").unwrap();
/// assert_eq!(amount.amount(), 8000);
/// assert_eq!(amount.to_string(), "$8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Dollars(i128);

impl Dollars {
    /// Zero dollars, the payout assigned to records that could not be computed.
    pub const ZERO: Self = Dollars(0);

    pub fn new(amount: i128) -> Self {
        Dollars(amount)
    }

    /// Returns the numeric magnitude without the `$` prefix.
    pub fn amount(&self) -> i128 {
        self.0
    }

    /// Multiplies hours by a rate, returning `None` on overflow.
    pub fn checked_product(hours: i128, rate: i128) -> Option<Self> {
        hours.checked_mul(rate).map(Dollars)
    }

    /// Adds two amounts, returning `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Dollars)
    }
}

/// Error returned when a string is not of the form `$<integer>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDollarsError(String);

impl fmt::Display for ParseDollarsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid dollar amount: {:?}", self.0)
    }
}

impl std::error::Error for ParseDollarsError {}

impl FromStr for Dollars {
    type Err = ParseDollarsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix('$')
            .ok_or_else(|| ParseDollarsError(s.to_string()))?;
        digits
            .parse::<i128>()
            .map(Dollars)
            .map_err(|_| ParseDollarsError(s.to_string()))
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl Serialize for Dollars {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
