//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations, exact threshold checks and
//! formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency prefixes tolerated in front of an amount
const CURRENCY_PREFIXES: [&str; 5] = ["R", "$", "€", "£", "¥"];

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Using i64 cents avoids floating-point precision issues and supports
/// amounts up to approximately 92 quadrillion units (both positive and negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use smart_budget::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// `true` when `self > percent% of base`, compared exactly
    ///
    /// # Examples
    /// ```
    /// use smart_budget::models::Money;
    /// let spent = Money::from_units(450);
    /// assert!(spent.exceeds_percent_of(Money::from_units(500), 80));
    /// assert!(!spent.exceeds_percent_of(Money::from_units(600), 80));
    /// ```
    pub fn exceeds_percent_of(&self, base: Money, percent: i64) -> bool {
        i128::from(self.0) * 100 > i128::from(base.0) * i128::from(percent)
    }

    /// `true` when `self < percent% of base`, compared exactly
    pub fn below_percent_of(&self, base: Money, percent: i64) -> bool {
        i128::from(self.0) * 100 < i128::from(base.0) * i128::from(percent)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "+10", "R10.50", "$ 10.50", "(10.50)",
    /// "1,234.50" and the decimal-comma form "10,50". Extra decimal places are
    /// rounded to the nearest cent, with halves rounded away from zero, so
    /// "10.555" reads as 10.56 and "-10.555" as -10.56.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let mut rest = s.trim();

        // Accounting format: "(10.50)" is negative
        let mut negative = false;
        if let Some(inner) = rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
            negative = true;
            rest = inner.trim();
        }

        rest = strip_sign(rest, &mut negative);
        if let Some(stripped) = CURRENCY_PREFIXES.iter().find_map(|p| rest.strip_prefix(p)) {
            rest = strip_sign(stripped.trim_start(), &mut negative);
        }

        let normalized = normalize_separators(rest);
        let (whole, fraction) = match normalized.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (normalized.as_str(), ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents_value: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };
        let round_up = i64::from(fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5'));

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_value))
            .and_then(|c| c.checked_add(round_up))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol and thousands grouping, e.g. `R 1,234.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let grouped = group_thousands(self.units().unsigned_abs());
        let sign = if self.is_negative() { "-" } else { "" };
        if symbol.is_empty() {
            format!("{}{}.{:02}", sign, grouped, self.cents_part())
        } else {
            format!("{} {}{}.{:02}", symbol, sign, grouped, self.cents_part())
        }
    }
}

fn strip_sign<'s>(s: &'s str, negative: &mut bool) -> &'s str {
    if let Some(stripped) = s.strip_prefix('-') {
        *negative = !*negative;
        stripped.trim_start()
    } else if let Some(stripped) = s.strip_prefix('+') {
        stripped.trim_start()
    } else {
        s
    }
}

/// Resolve thousands separators and a decimal comma into plain `1234.50`
fn normalize_separators(s: &str) -> String {
    let s: String = s.chars().filter(|c| *c != ' ' && *c != '_').collect();
    if !s.contains('.') {
        if let Some((whole, fraction)) = s.split_once(',') {
            if !fraction.contains(',') && (1..=2).contains(&fraction.len()) {
                return format!("{}.{}", whole, fraction);
            }
        }
    }
    s.replace(',', "")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

// Arithmetic saturates at the i64 bounds instead of overflowing

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
