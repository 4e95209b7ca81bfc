//! # Split Engine
//!
//! The group-dining bill-split calculation.
//!
//! ## Allocation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    compute_split(&bill)                                 │
//! │                                                                         │
//! │  1. Validate everything ──► any failure returns before allocation     │
//! │                                                                         │
//! │  2. Allocate each item's price to people, in integer cents:            │
//! │                                                                         │
//! │     exclusive item ──► split evenly among its assignees                │
//! │     shared item ─────► split evenly among people NOT assigned to it    │
//! │                        (they already have it exclusively)              │
//! │                                                                         │
//! │     Leftover cents go to the earliest recipients in party order, so    │
//! │     the allocated subtotals always sum back to the bill exactly.       │
//! │                                                                         │
//! │  3. Per person, on their subtotal:                                     │
//! │     tax     = subtotal × tax rate                                      │
//! │     service = subtotal × service-charge rate                           │
//! │     tip     = subtotal × their personal tip rate (pre-tax base!)       │
//! │     total   = subtotal + tax + service + tip                           │
//! │                                                                         │
//! │  PURE FUNCTION: no I/O, no state, never mutates the bill.              │
//! │  Same bill in, same shares out.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tip is calculated on the pre-tax, pre-service subtotal only. That is the
//! standard etiquette rule: you tip on the food and drinks, not on the
//! government's cut.
//!
//! ## Example
//! ```rust
//! use split_core::bill::Bill;
//! use split_core::split::compute_split;
//! use split_core::types::{Item, ItemCategory, Person};
//!
//! let mut bill = Bill::new();
//! bill.add_person(Person {
//!     id: "p1".to_string(),
//!     name: "Ana".to_string(),
//!     tip_rate_mpct: 20_000, // 20%
//! }).unwrap();
//! bill.add_item(Item {
//!     id: "i1".to_string(),
//!     name: "Ramen".to_string(),
//!     price_cents: 1600,
//!     shared: true,
//!     category: ItemCategory::Food,
//!     assigned_to: vec![],
//! }).unwrap();
//! bill.set_tax_rate(10_000).unwrap(); // 10%
//!
//! let shares = compute_split(&bill).unwrap();
//! assert_eq!(shares[0].subtotal_cents, 1600);
//! assert_eq!(shares[0].tax_cents, 160);
//! assert_eq!(shares[0].tip_cents, 320);
//! assert_eq!(shares[0].total_cents, 2080);
//! ```

use crate::bill::Bill;
use crate::error::{SplitError, SplitResult, ValidationError};
use crate::money::Money;
use crate::types::{Item, Person, PersonShare};
use crate::validation::{validate_item_name, validate_person_name, validate_price_cents};

// =============================================================================
// Engine
// =============================================================================

/// Computes each person's share of the bill.
///
/// Returns one [`PersonShare`] per person, in party order. The results are
/// derived values: nothing is cached, nothing is persisted, and calling
/// this twice on the same bill yields identical output.
///
/// ## Errors
/// All failures are invalid-input conditions detected before any
/// allocation runs (see [`SplitError`]): negative prices, an empty party
/// with items present, duplicate ids, assignments to unknown people, an
/// exclusive item nobody is assigned to, or a shared item with nobody
/// left to share it. Rates have no upper bound: a 150% service charge or
/// a 350% tip is unusual but computes like any other rate.
pub fn compute_split(bill: &Bill) -> SplitResult<Vec<PersonShare>> {
    validate_bill(bill)?;

    // Allocate every item's price across the party, exact to the cent.
    let mut subtotals = vec![Money::zero(); bill.people.len()];
    for item in &bill.items {
        let recipients = recipients_of(item, &bill.people);
        let shares = item.price().split_even(recipients.len());
        for (share, idx) in shares.into_iter().zip(recipients) {
            subtotals[idx] += share;
        }
    }

    let tax_rate = bill.tax_rate();
    let service_rate = bill.service_charge();

    let shares = bill
        .people
        .iter()
        .zip(subtotals)
        .map(|(person, subtotal)| {
            let tax = subtotal.apply_rate(tax_rate);
            let service = subtotal.apply_rate(service_rate);
            let tip = subtotal.apply_rate(person.tip_rate());
            let total = subtotal + tax + service + tip;

            PersonShare {
                person_id: person.id.clone(),
                person_name: person.name.clone(),
                subtotal_cents: subtotal.cents(),
                tax_cents: tax.cents(),
                service_charge_cents: service.cents(),
                tip_cents: tip.cents(),
                total_cents: total.cents(),
            }
        })
        .collect();

    Ok(shares)
}

/// Indices (in party order) of the people who pay for this item.
///
/// Exclusive item: its assignees. Shared item: everyone NOT individually
/// assigned to it — an assignee already carries the item exclusively, so
/// only the rest of the table shares the communal one.
fn recipients_of(item: &Item, people: &[Person]) -> Vec<usize> {
    people
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            if item.shared {
                !item.is_assigned_to(&p.id)
            } else {
                item.is_assigned_to(&p.id)
            }
        })
        .map(|(idx, _)| idx)
        .collect()
}

// =============================================================================
// Validation (all-or-nothing, before allocation)
// =============================================================================

// Rates carry no upper bound here: any non-negative rate computes, and
// `Rate` is unsigned. The 100%/300% typo guards belong to the Bill
// mutation ops, alongside the item/party caps.
fn validate_bill(bill: &Bill) -> SplitResult<()> {
    if bill.people.is_empty() && !bill.items.is_empty() {
        return Err(SplitError::EmptyPeople);
    }

    for (idx, person) in bill.people.iter().enumerate() {
        validate_person_name(&person.name)?;

        if bill.people[..idx].iter().any(|p| p.id == person.id) {
            return Err(ValidationError::Duplicate {
                field: "person id".to_string(),
                value: person.id.clone(),
            }
            .into());
        }
    }

    for (idx, item) in bill.items.iter().enumerate() {
        validate_item_name(&item.name)?;
        validate_price_cents(item.price_cents)?;

        if bill.items[..idx].iter().any(|i| i.id == item.id) {
            return Err(ValidationError::Duplicate {
                field: "item id".to_string(),
                value: item.id.clone(),
            }
            .into());
        }

        for person_id in &item.assigned_to {
            if !bill.people.iter().any(|p| &p.id == person_id) {
                return Err(SplitError::UnknownPerson {
                    item: item.name.clone(),
                    person_id: person_id.clone(),
                });
            }
        }

        if recipients_of(item, &bill.people).is_empty() {
            return Err(if item.shared {
                SplitError::NoEligibleSharers {
                    item: item.name.clone(),
                }
            } else {
                SplitError::UnassignedItem {
                    item: item.name.clone(),
                }
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BillTotals, ItemCategory};

    fn person(id: &str, name: &str, tip_rate_mpct: u32) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            tip_rate_mpct,
        }
    }

    fn item(id: &str, name: &str, price_cents: i64, shared: bool, assigned: &[&str]) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            shared,
            category: ItemCategory::Food,
            assigned_to: assigned.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Builds a bill directly (bypassing the mutation API) so tests can
    /// also construct inputs the UI layer would normally prevent.
    fn bill(items: Vec<Item>, people: Vec<Person>, tax_mpct: u32, service_mpct: u32) -> Bill {
        Bill {
            items,
            people,
            tax_rate_mpct: tax_mpct,
            service_charge_mpct: service_mpct,
            ..Bill::new()
        }
    }

    // -------------------------------------------------------------------------
    // Scenario tests
    // -------------------------------------------------------------------------

    /// Two people, one $100 shared item, NYC tax, both tip 20%.
    #[test]
    fn test_scenario_equal_split() {
        let b = bill(
            vec![item("i1", "Tasting Menu", 10_000, true, &[])],
            vec![person("p1", "Ana", 20_000), person("p2", "Ben", 20_000)],
            8875, // 8.875%
            0,
        );

        let shares = compute_split(&b).unwrap();
        for share in &shares {
            assert_eq!(share.subtotal_cents, 5000);
            assert_eq!(share.tax_cents, 444); // $4.4375 → $4.44
            assert_eq!(share.service_charge_cents, 0);
            assert_eq!(share.tip_cents, 1000);
            assert_eq!(share.total_cents, 6444);
        }

        let totals = BillTotals::from(shares.as_slice());
        assert_eq!(totals.total_cents, 12_888); // ≈ $128.88 grand total
    }

    /// Itemized bill with mixed tip rates:
    /// Ana: $30 exclusive + half of $50 shared, tips 15%.
    /// Ben: $20 exclusive + half of $50 shared, tips 25%.
    #[test]
    fn test_scenario_itemized_mixed_tips() {
        let b = bill(
            vec![
                item("i1", "Steak", 3000, false, &["p1"]),
                item("i2", "Pasta", 2000, false, &["p2"]),
                item("i3", "Nachos", 5000, true, &[]),
            ],
            vec![person("p1", "Ana", 15_000), person("p2", "Ben", 25_000)],
            10_000, // 10%
            0,
        );

        let shares = compute_split(&b).unwrap();

        assert_eq!(shares[0].subtotal_cents, 5500);
        assert_eq!(shares[0].tax_cents, 550);
        assert_eq!(shares[0].tip_cents, 825);
        assert_eq!(shares[0].total_cents, 6875);

        assert_eq!(shares[1].subtotal_cents, 4500);
        assert_eq!(shares[1].tax_cents, 450);
        assert_eq!(shares[1].tip_cents, 1125);
        assert_eq!(shares[1].total_cents, 6075);
    }

    /// All tip rates zero → every tip is exactly 0 and
    /// total = subtotal + tax + service.
    #[test]
    fn test_scenario_zero_tip() {
        let b = bill(
            vec![item("i1", "Buffet", 7500, true, &[])],
            vec![person("p1", "Ana", 0), person("p2", "Ben", 0), person("p3", "Cy", 0)],
            8000,  // 8%
            10_000, // 10% service
        );

        for share in compute_split(&b).unwrap() {
            assert_eq!(share.tip_cents, 0);
            assert_eq!(
                share.total_cents,
                share.subtotal_cents + share.tax_cents + share.service_charge_cents
            );
        }
    }

    /// Shared item but nobody at the table → refused, not NaN.
    #[test]
    fn test_scenario_zero_people_guard() {
        let b = bill(vec![item("i1", "Nachos", 1200, true, &[])], vec![], 0, 0);
        assert!(matches!(compute_split(&b), Err(SplitError::EmptyPeople)));
    }

    // -------------------------------------------------------------------------
    // Property tests
    // -------------------------------------------------------------------------

    /// Allocated subtotals reconcile with the bill EXACTLY; each person's
    /// rounded tax/service/tip differs from the unrounded value by less
    /// than a cent, so the grand total is within 1 cent per person of the
    /// ideal bill total.
    #[test]
    fn test_reconciliation() {
        let b = bill(
            vec![
                item("i1", "Oysters", 3799, true, &[]),
                item("i2", "Steak", 5601, false, &["p1"]),
                item("i3", "Wine", 8403, true, &["p2"]), // p2 excluded, p1 and p3 share
                item("i4", "Cake", 701, false, &["p2", "p3"]),
            ],
            vec![
                person("p1", "Ana", 18_000),
                person("p2", "Ben", 20_000),
                person("p3", "Cy", 15_000),
            ],
            8875,
            5000,
        );

        let shares = compute_split(&b).unwrap();
        let totals = BillTotals::from(shares.as_slice());

        // Subtotals reconcile exactly: remainder cents are distributed,
        // never dropped.
        assert_eq!(totals.subtotal_cents, b.subtotal_cents());

        // Ideal (unrounded) bill total, computed in milli-cents.
        let ideal_milli: i128 = shares
            .iter()
            .map(|s| {
                let sub = s.subtotal_cents as i128;
                sub * 100_000
                    + sub * 8875
                    + sub * 5000
                    + sub * b.people.iter().find(|p| p.id == s.person_id).unwrap().tip_rate_mpct
                        as i128
            })
            .sum();
        let actual_milli = totals.total_cents as i128 * 100_000;
        let tolerance = b.person_count() as i128 * 100_000; // 1 cent per person
        assert!((actual_milli - ideal_milli).abs() <= tolerance);
    }

    #[test]
    fn test_non_negativity() {
        let b = bill(
            vec![
                item("i1", "Water", 0, true, &[]),
                item("i2", "Bread", 1, true, &[]),
            ],
            vec![person("p1", "Ana", 0), person("p2", "Ben", 30_000)],
            1,
            1,
        );

        for share in compute_split(&b).unwrap() {
            assert!(share.subtotal_cents >= 0);
            assert!(share.tax_cents >= 0);
            assert!(share.service_charge_cents >= 0);
            assert!(share.tip_cents >= 0);
            assert!(share.total_cents >= share.subtotal_cents);
        }
    }

    #[test]
    fn test_determinism() {
        let b = bill(
            vec![
                item("i1", "Nachos", 1201, true, &[]),
                item("i2", "Steak", 3000, false, &["p2"]),
            ],
            vec![person("p1", "Ana", 18_000), person("p2", "Ben", 20_000)],
            8875,
            0,
        );

        assert_eq!(compute_split(&b).unwrap(), compute_split(&b).unwrap());
    }

    /// A single shared item of price P among k eligible people: every
    /// share is within one cent of P/k and the shares sum to P.
    #[test]
    fn test_shared_item_fairness() {
        let b = bill(
            vec![item("i1", "Paella", 10_001, true, &[])],
            vec![
                person("p1", "Ana", 0),
                person("p2", "Ben", 0),
                person("p3", "Cy", 0),
            ],
            0,
            0,
        );

        let shares = compute_split(&b).unwrap();
        let cents: Vec<i64> = shares.iter().map(|s| s.subtotal_cents).collect();
        assert_eq!(cents, vec![3334, 3334, 3333]);
        assert_eq!(cents.iter().sum::<i64>(), 10_001);
    }

    /// An item assigned exclusively to one person contributes zero to
    /// everyone else.
    #[test]
    fn test_exclusive_item_isolation() {
        let b = bill(
            vec![item("i1", "Whisky", 2500, false, &["p2"])],
            vec![
                person("p1", "Ana", 0),
                person("p2", "Ben", 0),
                person("p3", "Cy", 0),
            ],
            0,
            0,
        );

        let shares = compute_split(&b).unwrap();
        assert_eq!(shares[0].subtotal_cents, 0);
        assert_eq!(shares[1].subtotal_cents, 2500);
        assert_eq!(shares[2].subtotal_cents, 0);
    }

    // -------------------------------------------------------------------------
    // Semantics and edge cases
    // -------------------------------------------------------------------------

    /// Shared item with an assignee: the assignee is excluded from the
    /// communal split; everyone else shares it.
    #[test]
    fn test_shared_item_excludes_assignees() {
        let b = bill(
            vec![item("i1", "Sangria", 3000, true, &["p1"])],
            vec![
                person("p1", "Ana", 0),
                person("p2", "Ben", 0),
                person("p3", "Cy", 0),
            ],
            0,
            0,
        );

        let shares = compute_split(&b).unwrap();
        assert_eq!(shares[0].subtotal_cents, 0);
        assert_eq!(shares[1].subtotal_cents, 1500);
        assert_eq!(shares[2].subtotal_cents, 1500);
    }

    /// Exclusive item with several assignees: split evenly among them.
    #[test]
    fn test_exclusive_item_multiple_assignees() {
        let b = bill(
            vec![item("i1", "Fondue", 4001, false, &["p1", "p3"])],
            vec![
                person("p1", "Ana", 0),
                person("p2", "Ben", 0),
                person("p3", "Cy", 0),
            ],
            0,
            0,
        );

        let shares = compute_split(&b).unwrap();
        assert_eq!(shares[0].subtotal_cents, 2001);
        assert_eq!(shares[1].subtotal_cents, 0);
        assert_eq!(shares[2].subtotal_cents, 2000);
    }

    /// Shared item where every person is individually assigned: nobody is
    /// left to share it, so the input is refused.
    #[test]
    fn test_shared_item_no_eligible_sharers_fails() {
        let b = bill(
            vec![item("i1", "Nachos", 1200, true, &["p1", "p2"])],
            vec![person("p1", "Ana", 0), person("p2", "Ben", 0)],
            0,
            0,
        );

        assert!(matches!(
            compute_split(&b),
            Err(SplitError::NoEligibleSharers { .. })
        ));
    }

    /// Exclusive item with no assignees: its price would vanish from the
    /// bill, so the input is refused.
    #[test]
    fn test_unassigned_exclusive_item_fails() {
        let b = bill(
            vec![item("i1", "Mystery", 1200, false, &[])],
            vec![person("p1", "Ana", 0)],
            0,
            0,
        );

        assert!(matches!(
            compute_split(&b),
            Err(SplitError::UnassignedItem { .. })
        ));
    }

    #[test]
    fn test_assignment_to_unknown_person_fails() {
        let b = bill(
            vec![item("i1", "Burger", 1200, false, &["ghost"])],
            vec![person("p1", "Ana", 0)],
            0,
            0,
        );

        assert!(matches!(
            compute_split(&b),
            Err(SplitError::UnknownPerson { .. })
        ));
    }

    #[test]
    fn test_negative_price_fails() {
        let b = bill(
            vec![item("i1", "Refund?", -500, true, &[])],
            vec![person("p1", "Ana", 0)],
            0,
            0,
        );

        assert!(matches!(
            compute_split(&b),
            Err(SplitError::Validation(ValidationError::NegativeAmount { .. }))
        ));
    }

    /// Rates above the UI's typo guards are still valid engine input:
    /// non-negative is the only rate requirement here.
    #[test]
    fn test_rates_above_typo_guards_still_compute() {
        let b = bill(
            vec![item("i1", "Banquet", 1000, true, &[])],
            vec![person("p1", "Ana", 350_000)], // 350% tip
            150_000,                            // 150% "tax"
            120_000,                            // 120% service
        );

        let shares = compute_split(&b).unwrap();
        assert_eq!(shares[0].subtotal_cents, 1000);
        assert_eq!(shares[0].tax_cents, 1500);
        assert_eq!(shares[0].service_charge_cents, 1200);
        assert_eq!(shares[0].tip_cents, 3500);
        assert_eq!(shares[0].total_cents, 7200);
    }

    #[test]
    fn test_duplicate_person_id_fails() {
        let b = bill(
            vec![],
            vec![person("p1", "Ana", 0), person("p1", "Doppelganger", 0)],
            0,
            0,
        );

        assert!(matches!(
            compute_split(&b),
            Err(SplitError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    /// Empty bill (no items, no people) is valid and yields no shares.
    #[test]
    fn test_empty_bill_yields_no_shares() {
        let b = bill(vec![], vec![], 0, 0);
        assert!(compute_split(&b).unwrap().is_empty());
    }

    /// People but no items: everyone owes zero.
    #[test]
    fn test_people_without_items_owe_nothing() {
        let b = bill(vec![], vec![person("p1", "Ana", 20_000)], 8875, 5000);
        let shares = compute_split(&b).unwrap();
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].total_cents, 0);
    }

    /// The engine reads a snapshot; the caller's bill is untouched.
    #[test]
    fn test_inputs_not_mutated() {
        let b = bill(
            vec![item("i1", "Nachos", 1200, true, &[])],
            vec![person("p1", "Ana", 20_000)],
            8875,
            0,
        );
        let before = serde_json::to_value(&b).unwrap();

        compute_split(&b).unwrap();

        assert_eq!(serde_json::to_value(&b).unwrap(), before);
    }
}
