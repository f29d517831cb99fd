//! # Money Module
//!
//! Provides the `Money` type for handling prices and cart totals exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A latte at 4.75 × 3 in floats can display fine and still compare      │
//! │  unequal to 14.25.                                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    475 cents × 3 = 1425 cents, exactly, every time                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use crema_core::money::Money;
//!
//! let latte = Money::from_cents(475); // $4.75
//! let total = latte * 2 + Money::from_cents(350);
//! assert_eq!(total.to_string(), "$13.00");
//!
//! // Decimal strings from the UI boundary parse exactly
//! assert_eq!(Money::parse_decimal("3.5").unwrap().cents(), 350);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative input is representable so validation can reject it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serialized as a plain integer of cents
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► CartItemInput.price ──► CartLineItem.price
///                                                   │
///                                     × quantity ───┤
///                                                   ▼
///                                   CartLineItem::line_total()
///                                                   │
///                                       Σ lines ────┤
///                                                   ▼
///                                       CartState::cart_total() ──► "$7.00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use crema_core::money::Money;
    ///
    /// let price = Money::from_cents(350); // Represents $3.50
    /// assert_eq!(price.cents(), 350);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal string such as `"4.75"`, `"3.5"` or `"3"` into cents.
    ///
    /// At most two fraction digits are accepted, so the result is always
    /// exact. Add-to-cart payloads carry prices this way (see [`decimal`]).
    ///
    /// ## Example
    /// ```rust
    /// use crema_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("4.75").unwrap().cents(), 475);
    /// assert_eq!(Money::parse_decimal("3.5").unwrap().cents(), 350);
    /// assert!(Money::parse_decimal("3.505").is_err());
    /// assert!(Money::parse_decimal("three").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> ValidationResult<Money> {
        let trimmed = input.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (major, minor) = digits.split_once('.').unwrap_or((digits, ""));

        if major.is_empty() && minor.is_empty() {
            return Err(invalid("must be a decimal number"));
        }
        if !major.chars().chain(minor.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a decimal number"));
        }
        if minor.len() > 2 {
            return Err(invalid("must have at most two decimal places"));
        }

        let major_units: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| invalid("is too large"))?
        };
        let minor_units: i64 = match minor.len() {
            0 => 0,
            // "3.5" means 50 cents, not 5
            1 => minor.parse::<i64>().map_err(|_| invalid("must be a decimal number"))? * 10,
            _ => minor.parse().map_err(|_| invalid("must be a decimal number"))?,
        };

        let cents = major_units
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor_units))
            .ok_or_else(|| invalid("is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use crema_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(475).dollars(), 4);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity.
    ///
    /// Saturates instead of overflowing; a cart line can saturate its
    /// quantity at `i64::MAX` after enough repeated adds.
    ///
    /// ## Example
    /// ```rust
    /// use crema_core::money::Money;
    ///
    /// let latte = Money::from_cents(475);
    /// assert_eq!(latte.multiply_quantity(3).cents(), 1425);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Formats with a caller-supplied currency symbol, rounded to two digits.
    ///
    /// ## Example
    /// ```rust
    /// use crema_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(700).format_with("€"), "€7.00");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money in the two-fraction-digit display form (`$7.00`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Decimal Wire Format
// =============================================================================

/// Serde helpers for prices written as decimal currency units (`3.50`).
///
/// The storefront's menu and its add-to-cart actions carry prices the way
/// they are printed: `3.50`, `5` or `"4.75"`. Use with
/// `#[serde(with = "crate::money::decimal")]`; every form goes through
/// [`Money::parse_decimal`], so anything finer than a cent is rejected.
///
/// ```rust
/// use crema_core::types::CartItemInput;
///
/// let json = r#"{"id":"espresso","name":"Espresso","price":3.50}"#;
/// let input: CartItemInput = serde_json::from_str(json).unwrap();
/// assert_eq!(input.price.cents(), 350);
/// ```
pub mod decimal {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Money;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DecimalRepr {
        Whole(i64),
        Fractional(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Exact for any price below 2^53 cents
        serializer.serialize_f64(value.cents() as f64 / 100.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        match DecimalRepr::deserialize(deserializer)? {
            DecimalRepr::Whole(units) => units
                .checked_mul(100)
                .map(Money::from_cents)
                .ok_or_else(|| de::Error::custom("price is too large")),
            DecimalRepr::Fractional(value) => {
                Money::parse_decimal(&value.to_string()).map_err(de::Error::custom)
            }
            DecimalRepr::Text(text) => Money::parse_decimal(&text).map_err(de::Error::custom),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
