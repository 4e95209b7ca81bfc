//! # Domain Types
//!
//! Core domain types used throughout TipSplit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Item        │   │     Person      │   │  PersonShare    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  person_id      │       │
//! │  │  name           │   │  name           │   │  subtotal_cents │       │
//! │  │  price_cents    │   │  tip_rate_mpct  │   │  tax_cents      │       │
//! │  │  shared         │   └─────────────────┘   │  tip_cents      │       │
//! │  │  assigned_to[]  │                         │  total_cents    │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Rate        │   │  ItemCategory   │   │   BillTotals    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  mpct (u32)     │   │  Food           │   │  whole-table    │       │
//! │  │  8875 = 8.875%  │   │  Drink          │   │  summary row    │       │
//! │  └─────────────────┘   │  Other          │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items reference People only through `assigned_to` (many-to-many); no
//! Person owns an Item. Ownership is determined entirely by assignment
//! membership at calculation time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage rate represented in milli-percent (1/1000 of a percentage
/// point).
///
/// ## Why Milli-Percent?
/// Basis points (1/100 pct) cannot represent common sales-tax rates like
/// NYC's 8.875%. One more digit of grain covers every rate the source data
/// uses while keeping the same integer-newtype pattern:
/// 8875 = 8.875%, 20000 = 20%.
///
/// Non-negativity (`taxRate >= 0`, `tipPercentage >= 0`) holds by
/// construction: the inner value is unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from milli-percent.
    #[inline]
    pub const fn from_milli_percent(mpct: u32) -> Self {
        Rate(mpct)
    }

    /// Creates a rate from a percentage (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use split_core::types::Rate;
    ///
    /// let nyc = Rate::from_percentage(8.875);
    /// assert_eq!(nyc.milli_percent(), 8875);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        Rate((pct * 1000.0).round() as u32)
    }

    /// Returns the rate in milli-percent.
    #[inline]
    pub const fn milli_percent(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Item Category
// =============================================================================

/// Category of a bill item.
///
/// Descriptive only: the category never affects allocation. It exists so
/// the UI can group and color rows, and so category stays a closed enum
/// instead of a free-form string that typos can corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Food,
    Drink,
    Other,
}

impl Default for ItemCategory {
    fn default() -> Self {
        ItemCategory::Food
    }
}

// =============================================================================
// Item
// =============================================================================

/// A priced line item on the bill.
///
/// ## Sharing Semantics
/// ```text
/// shared = false  →  exclusive: cost divided among `assigned_to` only
/// shared = true   →  cost divided evenly among every person NOT listed
///                    in `assigned_to` (they already have it exclusively)
/// ```
/// With `shared = true` and an empty `assigned_to`, the item is split
/// across the whole party — the common case.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display label shown in the item list and result table.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Whether the item is shared (split among eligible people) or
    /// exclusive to its assignees.
    pub shared: bool,

    /// Descriptive category; not used in calculation.
    pub category: ItemCategory,

    /// Person ids this item is assigned to (zero, one, or many).
    pub assigned_to: Vec<String>,
}

impl Item {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the item is assigned to the given person.
    pub fn is_assigned_to(&self, person_id: &str) -> bool {
        self.assigned_to.iter().any(|id| id == person_id)
    }
}

// =============================================================================
// Person
// =============================================================================

/// A member of the dining party.
///
/// Each person carries their own tip rate: one table, different tippers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Person {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display label.
    pub name: String,

    /// Individual tip rate in milli-percent (20000 = 20%).
    pub tip_rate_mpct: u32,
}

impl Person {
    /// Returns the person's tip rate.
    #[inline]
    pub fn tip_rate(&self) -> Rate {
        Rate::from_milli_percent(self.tip_rate_mpct)
    }
}

// =============================================================================
// Person Share (result row)
// =============================================================================

/// One person's computed share of the bill.
///
/// Derived, never persisted: recomputed in full on every calculation call
/// and discarded once rendered. Tip is applied to `subtotal_cents` only —
/// tax and service charge are excluded from the tip base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonShare {
    /// Id of the person this row belongs to.
    pub person_id: String,

    /// Person name at time of calculation (frozen for display).
    pub person_name: String,

    /// Exclusive items plus shared-item shares, before tax/service/tip.
    pub subtotal_cents: i64,

    /// Tax on this person's subtotal.
    pub tax_cents: i64,

    /// Service charge on this person's subtotal.
    pub service_charge_cents: i64,

    /// Tip at this person's individual rate, on the subtotal only.
    pub tip_cents: i64,

    /// subtotal + tax + service charge + tip.
    pub total_cents: i64,
}

impl PersonShare {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Bill Totals (summary row)
// =============================================================================

/// Whole-table totals, for the summary row under the per-person rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BillTotals {
    pub person_count: usize,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub service_charge_cents: i64,
    pub tip_cents: i64,
    pub total_cents: i64,
}

impl From<&[PersonShare]> for BillTotals {
    fn from(shares: &[PersonShare]) -> Self {
        BillTotals {
            person_count: shares.len(),
            subtotal_cents: shares.iter().map(|s| s.subtotal_cents).sum(),
            tax_cents: shares.iter().map(|s| s.tax_cents).sum(),
            service_charge_cents: shares.iter().map(|s| s.service_charge_cents).sum(),
            tip_cents: shares.iter().map(|s| s.tip_cents).sum(),
            total_cents: shares.iter().map(|s| s.total_cents).sum(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
