//! # Bill Module
//!
//! The mutable bill a page session builds up before asking for a split.
//!
//! ## Bill Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Lifecycle                                       │
//! │                                                                         │
//! │  Frontend Action          Bill Operation          State Change          │
//! │  ───────────────          ──────────────          ────────────          │
//! │                                                                         │
//! │  Add dish ───────────────► add_item() ──────────► items.push(item)     │
//! │                                                                         │
//! │  Tap person chip ────────► assign_item() ───────► assigned_to.push(id) │
//! │                                                                         │
//! │  Add friend ─────────────► add_person() ────────► people.push(person)  │
//! │                                                                         │
//! │  Friend leaves ──────────► remove_person() ─────► people.remove(i)     │
//! │                                      │             + drop assignments   │
//! │                                      ▼                                  │
//! │  "Split it" button ──────► compute_split(&bill)   (read-only snapshot) │
//! │                                                                         │
//! │  NOTE: The engine never mutates the bill. All mutation happens here,   │
//! │        between calculation calls; each call sees a fresh snapshot.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SplitError, SplitResult, ValidationError};
use crate::types::{Item, Person, Rate};
use crate::validation::{
    validate_bill_rate_mpct, validate_item_name, validate_person_name, validate_price_cents,
    validate_tip_rate_mpct,
};
use crate::{MAX_BILL_ITEMS, MAX_PARTY_SIZE};

// =============================================================================
// Bill
// =============================================================================

/// A bill: items, party, and the table-wide rates.
///
/// ## Invariants
/// - Item ids and person ids are unique within the bill
/// - `assigned_to` entries always reference a person currently in the party
/// - Prices and rates are validated on the way in, so a bill built through
///   these operations always passes engine validation for field-level rules
/// - Maximum items: 100, maximum party size: 50
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Priced line items, in entry order (order is display-only).
    pub items: Vec<Item>,

    /// The dining party, in entry order.
    pub people: Vec<Person>,

    /// Tax rate in milli-percent, applied to each pre-tax subtotal.
    pub tax_rate_mpct: u32,

    /// Service-charge rate in milli-percent, applied to each pre-tax
    /// subtotal.
    pub service_charge_mpct: u32,

    /// When the bill was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Bill {
    /// Creates a new empty bill with zero rates.
    pub fn new() -> Self {
        Bill {
            items: Vec::new(),
            people: Vec::new(),
            tax_rate_mpct: 0,
            service_charge_mpct: 0,
            created_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Item operations
    // -------------------------------------------------------------------------

    /// Adds an item to the bill.
    ///
    /// ## Behavior
    /// - Validates name and price before anything is stored
    /// - Rejects duplicate item ids and assignments to unknown people
    pub fn add_item(&mut self, item: Item) -> SplitResult<()> {
        validate_item_name(&item.name)?;
        validate_price_cents(item.price_cents)?;

        if self.items.len() >= MAX_BILL_ITEMS {
            return Err(SplitError::TooManyItems {
                max: MAX_BILL_ITEMS,
            });
        }

        if self.items.iter().any(|i| i.id == item.id) {
            return Err(ValidationError::Duplicate {
                field: "item id".to_string(),
                value: item.id,
            }
            .into());
        }

        for person_id in &item.assigned_to {
            if !self.has_person(person_id) {
                return Err(SplitError::UnknownPerson {
                    item: item.name.clone(),
                    person_id: person_id.clone(),
                });
            }
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes an item from the bill by id.
    pub fn remove_item(&mut self, item_id: &str) -> SplitResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != item_id);

        if self.items.len() == initial_len {
            Err(SplitError::ItemNotFound(item_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Assigns an item to a person.
    ///
    /// Assigning an already-assigned person is a no-op, so a double-tap in
    /// the UI cannot create a duplicate entry.
    pub fn assign_item(&mut self, item_id: &str, person_id: &str) -> SplitResult<()> {
        if !self.has_person(person_id) {
            return Err(SplitError::PersonNotFound(person_id.to_string()));
        }

        let item = self.item_mut(item_id)?;
        if !item.is_assigned_to(person_id) {
            item.assigned_to.push(person_id.to_string());
        }
        Ok(())
    }

    /// Removes a person from an item's assignment list.
    pub fn unassign_item(&mut self, item_id: &str, person_id: &str) -> SplitResult<()> {
        let item = self.item_mut(item_id)?;
        item.assigned_to.retain(|id| id != person_id);
        Ok(())
    }

    /// Toggles an item between shared and exclusive.
    pub fn set_shared(&mut self, item_id: &str, shared: bool) -> SplitResult<()> {
        self.item_mut(item_id)?.shared = shared;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Person operations
    // -------------------------------------------------------------------------

    /// Adds a person to the party.
    pub fn add_person(&mut self, person: Person) -> SplitResult<()> {
        validate_person_name(&person.name)?;
        validate_tip_rate_mpct(person.tip_rate_mpct)?;

        if self.people.len() >= MAX_PARTY_SIZE {
            return Err(SplitError::TooManyPeople {
                max: MAX_PARTY_SIZE,
            });
        }

        if self.has_person(&person.id) {
            return Err(ValidationError::Duplicate {
                field: "person id".to_string(),
                value: person.id,
            }
            .into());
        }

        self.people.push(person);
        Ok(())
    }

    /// Removes a person from the party.
    ///
    /// ## Behavior
    /// Also removes the person from every item's `assigned_to` list, so no
    /// assignment can dangle. An exclusive item that loses its last
    /// assignee will fail engine validation until it is reassigned or
    /// marked shared; that is deliberate — somebody has to pay for it.
    pub fn remove_person(&mut self, person_id: &str) -> SplitResult<()> {
        let initial_len = self.people.len();
        self.people.retain(|p| p.id != person_id);

        if self.people.len() == initial_len {
            return Err(SplitError::PersonNotFound(person_id.to_string()));
        }

        for item in &mut self.items {
            item.assigned_to.retain(|id| id != person_id);
        }
        Ok(())
    }

    /// Updates a person's individual tip rate.
    pub fn set_tip_rate(&mut self, person_id: &str, tip_rate_mpct: u32) -> SplitResult<()> {
        validate_tip_rate_mpct(tip_rate_mpct)?;

        let person = self
            .people
            .iter_mut()
            .find(|p| p.id == person_id)
            .ok_or_else(|| SplitError::PersonNotFound(person_id.to_string()))?;
        person.tip_rate_mpct = tip_rate_mpct;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rate operations
    // -------------------------------------------------------------------------

    /// Sets the table-wide tax rate.
    pub fn set_tax_rate(&mut self, mpct: u32) -> SplitResult<()> {
        validate_bill_rate_mpct(mpct)?;
        self.tax_rate_mpct = mpct;
        Ok(())
    }

    /// Sets the table-wide service-charge rate.
    pub fn set_service_charge(&mut self, mpct: u32) -> SplitResult<()> {
        validate_bill_rate_mpct(mpct)?;
        self.service_charge_mpct = mpct;
        Ok(())
    }

    /// Returns the tax rate.
    #[inline]
    pub fn tax_rate(&self) -> Rate {
        Rate::from_milli_percent(self.tax_rate_mpct)
    }

    /// Returns the service-charge rate.
    #[inline]
    pub fn service_charge(&self) -> Rate {
        Rate::from_milli_percent(self.service_charge_mpct)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Returns the number of items on the bill.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the party size.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Checks if the bill has neither items nor people.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.people.is_empty()
    }

    /// Sum of all item prices (the pre-tax table subtotal).
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.price_cents).sum()
    }

    /// Clears all items and people and resets the rates.
    pub fn clear(&mut self) {
        self.items.clear();
        self.people.clear();
        self.tax_rate_mpct = 0;
        self.service_charge_mpct = 0;
        self.created_at = Utc::now();
    }

    fn has_person(&self, person_id: &str) -> bool {
        self.people.iter().any(|p| p.id == person_id)
    }

    fn item_mut(&mut self, item_id: &str) -> SplitResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| SplitError::ItemNotFound(item_id.to_string()))
    }
}

impl Default for Bill {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
