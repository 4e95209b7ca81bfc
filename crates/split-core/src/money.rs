//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many bill splitters:                                                │
//! │    $10.00 / 3 = $3.33 (×3 = $9.99)  → Lost $0.01!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Explicit Remainders                      │
//! │    1000 cents / 3 = [334, 333, 333]                                     │
//! │    The leftover cent goes to the first share, and the shares always    │
//! │    sum back to the original amount                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use split_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(500); // $15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: lets validation *detect* negative input instead of
///   silently wrapping it away at the type level
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Item.price_cents ──► per-person allocation ──► PersonShare.subtotal_cents
///                                                      │
///                        tax / service / tip  ◄────────┘
///                                                      │
///                                 PersonShare.total_cents ──► UI display
/// ```
/// Every monetary value in the engine flows through this type. The engine is
/// agnostic to currency and locale; a frontend formatter turns raw cents
/// into a localized display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use split_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use split_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(price.cents(), 1099);
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

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage rate and returns the resulting amount,
    /// rounded half-up to whole cents.
    ///
    /// This is the single primitive behind tax shares, service-charge
    /// shares, and tips: each is `subtotal × rate`, independently rounded
    /// to cents. Tips are applied to the pre-tax subtotal only, but that
    /// is the caller's rule; this function just multiplies.
    ///
    /// ## Implementation
    /// Integer math in i128 to prevent overflow on large amounts:
    /// `(cents × milli_percent + 50_000) / 100_000`
    /// The +50_000 provides half-up rounding (50_000/100_000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use split_core::money::Money;
    /// use split_core::types::Rate;
    ///
    /// let share = Money::from_cents(5000);        // $50.00
    /// let nyc_tax = Rate::from_percentage(8.875); // 8.875%
    ///
    /// // $50.00 × 8.875% = $4.4375 → rounds to $4.44
    /// assert_eq!(share.apply_rate(nyc_tax).cents(), 444);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        let amount = (self.0 as i128 * rate.milli_percent() as i128 + 50_000) / 100_000;
        Money::from_cents(amount as i64)
    }

    /// Splits the amount into `parts` integer-cent shares that sum back to
    /// the original amount exactly.
    ///
    /// The remainder cents (at most `parts - 1` of them) are distributed
    /// one each to the earliest shares, so the split is deterministic and
    /// nothing is lost to rounding.
    ///
    /// Returns an empty vector for `parts == 0`; callers that cannot
    /// tolerate that (the split engine) must validate the divisor first.
    ///
    /// ## Example
    /// ```rust
    /// use split_core::money::Money;
    ///
    /// let appetizer = Money::from_cents(1000); // $10.00 shared by 3
    /// let shares = appetizer.split_even(3);
    ///
    /// assert_eq!(shares.iter().map(Money::cents).collect::<Vec<_>>(), vec![334, 333, 333]);
    /// assert_eq!(shares.iter().map(Money::cents).sum::<i64>(), 1000);
    /// ```
    pub fn split_even(&self, parts: usize) -> Vec<Money> {
        if parts == 0 {
            return Vec::new();
        }

        let parts = parts as i64;
        let base = self.0 / parts;
        let remainder = self.0 % parts;

        (0..parts)
            .map(|i| {
                if i < remainder {
                    Money(base + 1)
                } else {
                    Money(base)
                }
            })
            .collect()
    }

    /// Rounds the amount up to the next whole dollar.
    ///
    /// Used by the quick tip calculator's round-up mode so a per-person
    /// amount like $21.37 becomes an easy-to-hand-over $22.00.
    ///
    /// ## Example
    /// ```rust
    /// use split_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(2137).round_up_to_dollar().cents(), 2200);
    /// assert_eq!(Money::from_cents(2200).round_up_to_dollar().cents(), 2200);
    /// ```
    pub const fn round_up_to_dollar(&self) -> Money {
        let rem = self.0 % 100;
        if rem == 0 {
            Money(self.0)
        } else {
            Money(self.0 + (100 - rem))
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and plain-text messages. Use frontend formatting
/// for actual UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Sum of an iterator of Money values (for subtotal reductions).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
