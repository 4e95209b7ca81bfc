//! # Bill State
//!
//! Manages the current page session's bill.
//!
//! ## Thread Safety
//! The bill is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple operations may access/modify the bill
//! 2. Only one operation should modify the bill at a time
//! 3. Independent page sessions each own their own `BillState`, so
//!    sessions never contend with each other
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Session Operation       Bill State Change     │
//! │  ───────────────          ─────────────────       ─────────────────     │
//! │                                                                         │
//! │  Add dish ───────────────► add_item() ──────────► items.push(item)     │
//! │                                                                         │
//! │  Add friend ─────────────► add_person() ────────► people.push(person)  │
//! │                                                                         │
//! │  Tap person chip ────────► assign_item() ───────► assigned_to.push(id) │
//! │                                                                         │
//! │  Edit tip % ─────────────► set_tip_rate() ──────► person.tip_rate      │
//! │                                                                         │
//! │  "Split it" button ──────► split() ─────────────► (read only)          │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        split() reads a snapshot; the engine never mutates the bill.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use split_core::validation::validate_id;
use split_core::{compute_split, Bill, Item, ItemCategory, Person};

use crate::error::ApiError;
use crate::response::{BillResponse, SplitResponse};

// =============================================================================
// Request DTOs
// =============================================================================

/// Payload for adding an item; the session mints the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub price_cents: i64,
    pub shared: bool,
    #[serde(default)]
    pub category: ItemCategory,
}

/// Payload for adding a person; the session mints the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub name: String,
    pub tip_rate_mpct: u32,
}

// =============================================================================
// Bill State
// =============================================================================

/// Session-managed bill state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Bill>>` because:
/// - `Arc`: allows shared ownership across threads
/// - `Mutex`: ensures only one operation modifies the bill at a time
///
/// ## Why Not RwLock?
/// Bill operations are quick and most of them write. A RwLock would add
/// complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct BillState {
    bill: Arc<Mutex<Bill>>,
}

impl BillState {
    /// Creates a new empty bill state.
    pub fn new() -> Self {
        BillState {
            bill: Arc::new(Mutex::new(Bill::new())),
        }
    }

    /// Executes a function with read access to the bill.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_bill(|bill| bill.item_count());
    /// ```
    pub fn with_bill<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Bill) -> R,
    {
        let bill = self.bill.lock().expect("Bill mutex poisoned");
        f(&bill)
    }

    /// Executes a function with write access to the bill.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_bill_mut(|bill| bill.set_tax_rate(8875))?;
    /// ```
    pub fn with_bill_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Bill) -> R,
    {
        let mut bill = self.bill.lock().expect("Bill mutex poisoned");
        f(&mut bill)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Gets the current bill snapshot.
    pub fn get_bill(&self) -> BillResponse {
        debug!("get_bill");
        self.with_bill(|bill| BillResponse::from(bill))
    }

    /// Computes the split for the current bill.
    ///
    /// Pure read: the bill is unchanged whether the split succeeds or not.
    pub fn split(&self) -> Result<SplitResponse, ApiError> {
        debug!("split");
        let shares = self.with_bill(|bill| compute_split(bill))?;
        Ok(SplitResponse::from(shares))
    }

    // -------------------------------------------------------------------------
    // Item operations
    // -------------------------------------------------------------------------

    /// Adds an item and returns the updated bill.
    pub fn add_item(&self, req: NewItem) -> Result<BillResponse, ApiError> {
        debug!(name = %req.name, price_cents = req.price_cents, shared = req.shared, "add_item");

        self.with_bill_mut(|bill| {
            bill.add_item(Item {
                id: Uuid::new_v4().to_string(),
                name: req.name.trim().to_string(),
                price_cents: req.price_cents,
                shared: req.shared,
                category: req.category,
                assigned_to: Vec::new(),
            })?;
            Ok(BillResponse::from(&*bill))
        })
    }

    /// Removes an item by id.
    pub fn remove_item(&self, item_id: &str) -> Result<BillResponse, ApiError> {
        debug!(item_id, "remove_item");
        check_id(item_id)?;

        self.with_bill_mut(|bill| {
            bill.remove_item(item_id)?;
            Ok(BillResponse::from(&*bill))
        })
    }

    /// Assigns an item to a person.
    pub fn assign_item(&self, item_id: &str, person_id: &str) -> Result<BillResponse, ApiError> {
        debug!(item_id, person_id, "assign_item");
        check_id(item_id)?;
        check_id(person_id)?;

        self.with_bill_mut(|bill| {
            bill.assign_item(item_id, person_id)?;
            Ok(BillResponse::from(&*bill))
        })
    }

    /// Removes a person from an item's assignment list.
    pub fn unassign_item(&self, item_id: &str, person_id: &str) -> Result<BillResponse, ApiError> {
        debug!(item_id, person_id, "unassign_item");
        check_id(item_id)?;
        check_id(person_id)?;

        self.with_bill_mut(|bill| {
            bill.unassign_item(item_id, person_id)?;
            Ok(BillResponse::from(&*bill))
        })
    }

    /// Toggles an item between shared and exclusive.
    pub fn set_shared(&self, item_id: &str, shared: bool) -> Result<BillResponse, ApiError> {
        debug!(item_id, shared, "set_shared");
        check_id(item_id)?;

        self.with_bill_mut(|bill| {
            bill.set_shared(item_id, shared)?;
            Ok(BillResponse::from(&*bill))
        })
    }

    // -------------------------------------------------------------------------
    // Person operations
    // -------------------------------------------------------------------------

    /// Adds a person and returns the updated bill.
    pub fn add_person(&self, req: NewPerson) -> Result<BillResponse, ApiError> {
        debug!(name = %req.name, tip_rate_mpct = req.tip_rate_mpct, "add_person");

        self.with_bill_mut(|bill| {
            bill.add_person(Person {
                id: Uuid::new_v4().to_string(),
                name: req.name.trim().to_string(),
                tip_rate_mpct: req.tip_rate_mpct,
            })?;
            Ok(BillResponse::from(&*bill))
        })
    }

    /// Removes a person by id (their item assignments are dropped too).
    pub fn remove_person(&self, person_id: &str) -> Result<BillResponse, ApiError> {
        debug!(person_id, "remove_person");
        check_id(person_id)?;

        self.with_bill_mut(|bill| {
            bill.remove_person(person_id)?;
            Ok(BillResponse::from(&*bill))
        })
    }

    /// Updates a person's individual tip rate.
    pub fn set_tip_rate(&self, person_id: &str, tip_rate_mpct: u32) -> Result<BillResponse, ApiError> {
        debug!(person_id, tip_rate_mpct, "set_tip_rate");
        check_id(person_id)?;

        self.with_bill_mut(|bill| {
            bill.set_tip_rate(person_id, tip_rate_mpct)?;
            Ok(BillResponse::from(&*bill))
        })
    }

    // -------------------------------------------------------------------------
    // Rate operations
    // -------------------------------------------------------------------------

    /// Sets the table-wide tax rate (milli-percent).
    pub fn set_tax_rate(&self, mpct: u32) -> Result<BillResponse, ApiError> {
        debug!(mpct, "set_tax_rate");

        self.with_bill_mut(|bill| {
            bill.set_tax_rate(mpct)?;
            Ok(BillResponse::from(&*bill))
        })
    }

    /// Sets the table-wide service-charge rate (milli-percent).
    pub fn set_service_charge(&self, mpct: u32) -> Result<BillResponse, ApiError> {
        debug!(mpct, "set_service_charge");

        self.with_bill_mut(|bill| {
            bill.set_service_charge(mpct)?;
            Ok(BillResponse::from(&*bill))
        })
    }

    /// Clears the whole session bill.
    pub fn clear(&self) -> BillResponse {
        debug!("clear");

        self.with_bill_mut(|bill| {
            bill.clear();
            BillResponse::from(&*bill)
        })
    }
}

/// Checks a caller-supplied id before any lookup runs.
///
/// Every id in the system was minted here as a UUID, so a malformed id is
/// a validation failure on every operation, never a lookup miss.
fn check_id(id: &str) -> Result<(), ApiError> {
    validate_id(id).map_err(|e| ApiError::validation(e.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use split_core::ItemCategory;

    fn init_logs() {
        // One-time init; later calls fail harmlessly.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn item(name: &str, price_cents: i64, shared: bool) -> NewItem {
        NewItem {
            name: name.to_string(),
            price_cents,
            shared,
            category: ItemCategory::Food,
        }
    }

    fn person(name: &str, tip_rate_mpct: u32) -> NewPerson {
        NewPerson {
            name: name.to_string(),
            tip_rate_mpct,
        }
    }

    #[test]
    fn test_session_end_to_end() {
        init_logs();
        let state = BillState::new();

        let bill = state.add_person(person("Ana", 20_000)).unwrap();
        let ana_id = bill.people[0].id.clone();
        state.add_person(person("Ben", 20_000)).unwrap();

        let bill = state.add_item(item("Tasting Menu", 10_000, true)).unwrap();
        assert_eq!(bill.subtotal_cents, 10_000);

        state.set_tax_rate(8875).unwrap();

        let result = state.split().unwrap();
        assert_eq!(result.shares.len(), 2);
        assert_eq!(result.shares[0].person_id, ana_id);
        assert_eq!(result.shares[0].total_cents, 6444);
        assert_eq!(result.totals.total_cents, 12_888);
    }

    #[test]
    fn test_session_assignment_flow() {
        init_logs();
        let state = BillState::new();

        let ana_id = state.add_person(person("Ana", 15_000)).unwrap().people[0]
            .id
            .clone();
        let bill = state.add_item(item("Steak", 3000, false)).unwrap();
        let steak_id = bill.items[0].id.clone();

        let bill = state.assign_item(&steak_id, &ana_id).unwrap();
        assert_eq!(bill.items[0].assigned_to, vec![ana_id.clone()]);

        let bill = state.unassign_item(&steak_id, &ana_id).unwrap();
        assert!(bill.items[0].assigned_to.is_empty());
    }

    #[test]
    fn test_split_failure_leaves_bill_intact() {
        init_logs();
        let state = BillState::new();

        state.add_item(item("Nachos", 1200, true)).unwrap();

        // No people yet: the split must fail but the bill must survive.
        let err = state.split().unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::EmptyPeople);
        assert_eq!(state.get_bill().items.len(), 1);
    }

    #[test]
    fn test_get_bill_reflects_current_state() {
        init_logs();
        let state = BillState::new();

        state.add_person(person("Ana", 20_000)).unwrap();
        state.add_item(item("Nachos", 1200, true)).unwrap();
        state.set_tax_rate(8875).unwrap();

        let bill = state.get_bill();
        assert_eq!(bill.people.len(), 1);
        assert_eq!(bill.items.len(), 1);
        assert_eq!(bill.tax_rate_mpct, 8875);
        assert_eq!(bill.subtotal_cents, 1200);
    }

    /// Every id-taking operation rejects a malformed id the same way:
    /// VALIDATION_ERROR, never NOT_FOUND.
    #[test]
    fn test_all_ops_reject_malformed_ids() {
        init_logs();
        let state = BillState::new();
        let code = crate::error::ErrorCode::ValidationError;

        assert_eq!(state.remove_item("not-a-uuid").unwrap_err().code, code);
        assert_eq!(state.remove_person("not-a-uuid").unwrap_err().code, code);
        assert_eq!(state.set_shared("not-a-uuid", true).unwrap_err().code, code);
        assert_eq!(
            state.set_tip_rate("not-a-uuid", 20_000).unwrap_err().code,
            code
        );

        let ana_id = state.add_person(person("Ana", 20_000)).unwrap().people[0]
            .id
            .clone();
        assert_eq!(
            state.assign_item("not-a-uuid", &ana_id).unwrap_err().code,
            code
        );
        assert_eq!(
            state.unassign_item("not-a-uuid", &ana_id).unwrap_err().code,
            code
        );
    }

    #[test]
    fn test_minted_ids_are_unique_uuids() {
        init_logs();
        let state = BillState::new();

        state.add_item(item("A", 100, true)).unwrap();
        let bill = state.add_item(item("B", 200, true)).unwrap();

        assert_ne!(bill.items[0].id, bill.items[1].id);
        assert!(validate_id(&bill.items[0].id).is_ok());
    }

    #[test]
    fn test_clear_resets_session() {
        init_logs();
        let state = BillState::new();

        state.add_person(person("Ana", 20_000)).unwrap();
        state.add_item(item("Nachos", 1200, true)).unwrap();
        state.set_service_charge(10_000).unwrap();

        let bill = state.clear();
        assert!(bill.items.is_empty());
        assert!(bill.people.is_empty());
        assert_eq!(bill.service_charge_mpct, 0);
    }

    #[test]
    fn test_shared_state_across_clones() {
        init_logs();
        let state = BillState::new();
        let view = state.clone();

        state.add_person(person("Ana", 20_000)).unwrap();
        assert_eq!(view.get_bill().people.len(), 1);
    }
}
