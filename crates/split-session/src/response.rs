//! # Response DTOs
//!
//! Serializable snapshots the frontend renders.
//!
//! ## Design Notes
//! - camelCase field names: these cross the JSON boundary into TypeScript
//! - Responses are value snapshots, cloned out from under the lock; the
//!   frontend can never observe a half-applied mutation

use serde::{Deserialize, Serialize};
use split_core::{Bill, BillTotals, Item, Person, PersonShare};

/// Bill snapshot: the item list, party, rates, and running subtotal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub items: Vec<Item>,
    pub people: Vec<Person>,
    pub tax_rate_mpct: u32,
    pub service_charge_mpct: u32,
    pub subtotal_cents: i64,
}

impl From<&Bill> for BillResponse {
    fn from(bill: &Bill) -> Self {
        BillResponse {
            items: bill.items.clone(),
            people: bill.people.clone(),
            tax_rate_mpct: bill.tax_rate_mpct,
            service_charge_mpct: bill.service_charge_mpct,
            subtotal_cents: bill.subtotal_cents(),
        }
    }
}

/// Split result: one row per person plus the summary row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResponse {
    pub shares: Vec<PersonShare>,
    pub totals: BillTotals,
}

impl From<Vec<PersonShare>> for SplitResponse {
    fn from(shares: Vec<PersonShare>) -> Self {
        let totals = BillTotals::from(shares.as_slice());
        SplitResponse { shares, totals }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
