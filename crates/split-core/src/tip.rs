//! # Quick Tip Calculator
//!
//! The simple single-bill calculator behind the non-itemized widgets:
//! one bill amount, one tip rate, optionally divided by party size.
//!
//! No bookkeeping here — this is `bill × rate` with honest rounding. The
//! itemized group-dining flow lives in [`crate::split`].
//!
//! Service quality is a closed enum carrying a suggested rate, not a
//! string-keyed multiplier table: an invalid quality value cannot exist.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{SplitResult, ValidationError};
use crate::money::Money;
use crate::types::Rate;
use crate::validation::validate_tip_rate_mpct;

// =============================================================================
// Service Quality
// =============================================================================

/// Perceived service quality, mapped to a customary US tip rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ServiceQuality {
    /// Service had real problems.
    Poor,
    /// Nothing wrong, nothing special.
    Fair,
    /// Attentive, solid service.
    Good,
    /// Went out of their way.
    Excellent,
}

impl ServiceQuality {
    /// The customary tip rate for this quality level.
    ///
    /// ## Example
    /// ```rust
    /// use split_core::tip::ServiceQuality;
    ///
    /// assert_eq!(ServiceQuality::Excellent.suggested_rate().milli_percent(), 20_000);
    /// ```
    pub const fn suggested_rate(self) -> Rate {
        match self {
            ServiceQuality::Poor => Rate::from_milli_percent(10_000), // 10%
            ServiceQuality::Fair => Rate::from_milli_percent(15_000), // 15%
            ServiceQuality::Good => Rate::from_milli_percent(18_000), // 18%
            ServiceQuality::Excellent => Rate::from_milli_percent(20_000), // 20%
        }
    }
}

// =============================================================================
// Rounding
// =============================================================================

/// How to round the per-person amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Exact cents (ceiling division, so the bill is always covered).
    Exact,
    /// Round each person's amount up to a whole dollar.
    UpToDollar,
}

// =============================================================================
// Tip Breakdown
// =============================================================================

/// Result of a quick tip calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipBreakdown {
    /// The bill amount the tip was computed on.
    pub bill_cents: i64,

    /// bill × tip rate, rounded half-up to cents.
    pub tip_cents: i64,

    /// bill + tip.
    pub total_cents: i64,

    /// How many ways the total is divided.
    pub party_size: usize,

    /// Each person's amount after rounding. `per_person × party_size`
    /// covers the total; with rounding it may exceed it by a few cents
    /// (the table over-tips, never stiffs).
    pub per_person_cents: i64,
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes tip, total, and per-person amount for a plain (non-itemized)
/// bill.
///
/// ## Example
/// ```rust
/// use split_core::money::Money;
/// use split_core::tip::{quick_tip, Rounding, ServiceQuality};
///
/// let result = quick_tip(
///     Money::from_cents(5000), // $50.00
///     ServiceQuality::Excellent.suggested_rate(),
///     2,
///     Rounding::Exact,
/// )
/// .unwrap();
///
/// assert_eq!(result.tip_cents, 1000);       // $10.00
/// assert_eq!(result.total_cents, 6000);     // $60.00
/// assert_eq!(result.per_person_cents, 3000) // $30.00 each
/// ```
pub fn quick_tip(
    bill: Money,
    tip_rate: Rate,
    party_size: usize,
    rounding: Rounding,
) -> SplitResult<TipBreakdown> {
    if bill.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: "bill".to_string(),
        }
        .into());
    }
    if party_size == 0 {
        return Err(ValidationError::MustBePositive {
            field: "party size".to_string(),
        }
        .into());
    }
    validate_tip_rate_mpct(tip_rate.milli_percent())?;

    let tip = bill.apply_rate(tip_rate);
    let total = bill + tip;

    // Ceiling division: the collected amounts must cover the total.
    let n = party_size as i64;
    let per_person = Money::from_cents((total.cents() + n - 1) / n);
    let per_person = match rounding {
        Rounding::Exact => per_person,
        Rounding::UpToDollar => per_person.round_up_to_dollar(),
    };

    Ok(TipBreakdown {
        bill_cents: bill.cents(),
        tip_cents: tip.cents(),
        total_cents: total.cents(),
        party_size,
        per_person_cents: per_person.cents(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
