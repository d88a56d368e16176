//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The scan payload carries a price as text. Parsing it with floats:     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    "599" parses to 59900 paise, exactly.                               │
//! │    Every cart total is a sum of exact integers.                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fourshop_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_paise(5000); // ₹50.00
//!
//! // Parse from a scanned price field
//! let scanned: Money = "50".parse().unwrap();
//! assert_eq!(scanned, price);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // ₹100.00
//! let total = price + Money::from_paise(2000);  // ₹70.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows subtraction to go negative without surprises
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Scan payload "<name>,<price>" ──► Product.unit_price                   │
/// │                                          │                              │
/// │  Recommendation rule table ──────► RecommendedProduct.unit_price        │
/// │                                          │                              │
/// │                                          ▼                              │
/// │  LineItem.line_total() ──► Cart.total() ──► Displayed as "₹649.00"      │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use fourshop_core::money::Money;
    ///
    /// let price = Money::from_paise(5999); // Represents ₹59.99
    /// assert_eq!(price.paise(), 5999);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from major and minor units (rupees and paise).
    ///
    /// ## Example
    /// ```rust
    /// use fourshop_core::money::Money;
    ///
    /// let price = Money::from_major_minor(599, 50); // ₹599.50
    /// assert_eq!(price.paise(), 59950);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in paise (smallest currency unit).
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (paise) portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use fourshop_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(5000); // ₹50.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.paise(), 10000); // ₹100.00
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Line item: Milk ₹50.00
    /// Quantity: 2
    ///      │
    ///      ▼
    /// multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: ₹100.00
    /// ```
    ///
    /// Saturates at the i64 range: a pathological scanned price times
    /// a large quantity clamps instead of wrapping.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error returned when a price field cannot be parsed into [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{text}' is not a non-negative decimal amount")]
pub struct ParseMoneyError {
    /// The offending input, trimmed.
    pub text: String,
}

/// Parses a non-negative decimal literal into paise.
///
/// ## Accepted Shapes
/// - `"50"`, `"50.5"`, `"50.50"`, `".5"`, `"5."`
/// - Surrounding whitespace is ignored
///
/// ## Rejected Shapes
/// - Signs (`"-5"`, `"+5"`), exponents (`"1e3"`), thousands
///   separators, empty input, anything non-ASCII-digit
///
/// Digits beyond the second decimal place are rounded half-up into
/// paise; all later arithmetic is exact integer math.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseMoneyError {
            text: trimmed.to_string(),
        };

        let (whole, frac) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };

        // At least one digit somewhere, and nothing but digits
        if whole.is_empty() && frac.is_empty() {
            return Err(err());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(err());
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| err())?
        };

        // First two fractional digits are paise; the third rounds half-up
        let mut digits = frac.chars().map(|c| (c as u8 - b'0') as i64);
        let mut minor = digits.next().unwrap_or(0) * 10 + digits.next().unwrap_or(0);
        if digits.next().unwrap_or(0) >= 5 {
            minor += 1;
        }

        major
            .checked_mul(100)
            .and_then(|p| p.checked_add(minor))
            .map(Money)
            .ok_or_else(err)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is the presentation-time rounding point: paise rendered as
/// exactly two decimal places. Internal arithmetic never rounds.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values. Saturates instead of overflowing.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Subtraction of two Money values. Saturates instead of overflowing.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
