//! Signed money amounts represented as integer cents.
//!
//! Every monetary value in the crate (entry amounts, balances, totals) is a
//! [`Money`] so that repeated aggregation never accumulates floating-point
//! drift. Values enter the system rounded to two decimals and all arithmetic
//! stays exact from there on.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Signed monetary amount in integer cents.
///
/// Display follows the schedule's numeric contract: thousands separators,
/// exactly two decimals, negatives wrapped in parentheses.
///
/// ```
/// use paysched::core::money::Money;
///
/// assert_eq!(Money::from_cents(1_234_56).to_string(), "1,234.56");
/// assert_eq!(Money::from_cents(-6_183_400).to_string(), "(61,834.00)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Raw signed decimal form with no separators and no parentheses,
    /// e.g. `-61834.00`. This is the form the CSV document uses.
    #[must_use]
    pub fn plain(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let grouped = group_thousands(abs / 100);
        let cents = abs % 100;
        if self.0 < 0 {
            write!(f, "({grouped}.{cents:02})")
        } else {
            write!(f, "{grouped}.{cents:02}")
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl FromStr for Money {
    type Err = AppError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts an optional leading `+`/`-` and a `.` decimal separator.
    /// Anything past the second fractional digit is rounded half-up (away
    /// from zero): `12.344` → 12.34, `12.345` → 12.35.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidAmount(s.trim().to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidAmount("empty amount".to_string()));
        }

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        let mut parts = rest.split('.');
        let units_str = parts.next().ok_or_else(invalid)?;
        let frac_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| invalid())?;

        let cents: i64 = match frac_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let mut digits = frac.chars();
                let tens = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
                let ones = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) as i64;
                let round_up = digits.next().and_then(|c| c.to_digit(10)).unwrap_or(0) >= 5;
                tens * 10 + ones + i64::from(round_up)
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| AppError::InvalidAmount("amount too large".to_string()))?;

        Ok(Money(sign * total))
    }
}

// The persisted blob and the JSON export both carry amounts as plain decimal
// numbers, so Money crosses serde as an f64 with two significant decimals.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(D::Error::custom("non-finite amount"));
        }
        Ok(Money((value * 100.0).round() as i64))
    }
}
