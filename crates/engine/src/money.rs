use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

use crate::{Currency, EngineError};

/// Signed money amount represented as **integer minor units**.
///
/// Use this type for **all** monetary values in the engine (expense amounts,
/// allocations, totals) to avoid floating-point drift. How many decimal
/// digits a minor unit carries depends on the [`Currency`]: VND has none,
/// EUR has two.
///
/// # Examples
///
/// ```rust
/// use engine::{Currency, Money};
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.format_in(Currency::Eur), "12.34 EUR");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects
/// more fraction digits than the currency allows):
///
/// ```rust
/// use engine::{Currency, Money};
///
/// assert_eq!(Money::parse("10", Currency::Eur).unwrap().minor(), 1000);
/// assert_eq!(Money::parse("10,5", Currency::Eur).unwrap().minor(), 1050);
/// assert_eq!(Money::parse("500000", Currency::Vnd).unwrap().minor(), 500_000);
/// assert!(Money::parse("12.345", Currency::Eur).is_err());
/// assert!(Money::parse("12.3", Currency::Vnd).is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Checked subtraction (returns `None` on overflow).
    #[must_use]
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Formats the amount with the currency's fraction digits and code.
    #[must_use]
    pub fn format_in(self, currency: Currency) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let digits = currency.minor_units() as u32;
        if digits == 0 {
            return format!("{sign}{abs} {}", currency.code());
        }
        let scale = 10u64.pow(digits);
        let major = abs / scale;
        let frac = abs % scale;
        format!(
            "{sign}{major}.{frac:0width$} {}",
            currency.code(),
            width = digits as usize
        )
    }

    /// Parses a decimal string into minor units of `currency`.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading
    /// `+`/`-`.
    ///
    /// Validation rules:
    /// - at most `currency.minor_units()` fraction digits
    /// - rejects empty/invalid strings
    pub fn parse(s: &str, currency: Currency) -> Result<Self, EngineError> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount("invalid amount".to_string());
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let major_str = parts.next().ok_or_else(invalid)?;
        let frac_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let major: i64 = major_str.parse().map_err(|_| invalid())?;

        let digits = currency.minor_units() as u32;
        let scale = 10i64.pow(digits);

        let frac: i64 = match frac_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                if frac.len() > digits as usize {
                    return Err(EngineError::InvalidAmount("too many decimals".to_string()));
                }
                let parsed: i64 = frac.parse().map_err(|_| invalid())?;
                parsed * 10i64.pow(digits - frac.len() as u32)
            }
        };

        let total = major
            .checked_mul(scale)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(overflow)?;

        let signed = if sign < 0 {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(Money(signed))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
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
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_eur_uses_two_fraction_digits() {
        assert_eq!(Money::new(0).format_in(Currency::Eur), "0.00 EUR");
        assert_eq!(Money::new(1).format_in(Currency::Eur), "0.01 EUR");
        assert_eq!(Money::new(1050).format_in(Currency::Eur), "10.50 EUR");
        assert_eq!(Money::new(-1050).format_in(Currency::Eur), "-10.50 EUR");
    }

    #[test]
    fn format_vnd_has_no_fraction() {
        assert_eq!(Money::new(500_000).format_in(Currency::Vnd), "500000 VND");
        assert_eq!(Money::new(-1).format_in(Currency::Vnd), "-1 VND");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!(Money::parse("10", Currency::Eur).unwrap().minor(), 1000);
        assert_eq!(Money::parse("10.5", Currency::Eur).unwrap().minor(), 1050);
        assert_eq!(Money::parse("10,50", Currency::Eur).unwrap().minor(), 1050);
        assert_eq!(Money::parse("-0.01", Currency::Eur).unwrap().minor(), -1);
        assert_eq!(Money::parse("  2.30 ", Currency::Eur).unwrap().minor(), 230);
    }

    #[test]
    fn parse_respects_currency_fraction_digits() {
        assert!(Money::parse("12.345", Currency::Eur).is_err());
        assert!(Money::parse("0.1", Currency::Vnd).is_err());
        assert_eq!(
            Money::parse("125000", Currency::Vnd).unwrap().minor(),
            125_000
        );
    }

    #[test]
    fn sum_folds_from_zero() {
        let total: Money = [Money::new(1), Money::new(2), Money::new(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::new(6));
    }
}
