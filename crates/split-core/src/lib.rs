//! # split-core: Pure Business Logic for TipSplit
//!
//! This crate is the **heart** of TipSplit. It contains the group-dining
//! bill-split engine and the quick tip math as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TipSplit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (TypeScript)                        │   │
//! │  │   Item form ──► Party chips ──► Rate inputs ──► Result table   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON DTOs                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    split-session                                │   │
//! │  │    Page-session bill state, mutation ops, response DTOs        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ split-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   split   │  │ validation│  │   │
//! │  │   │ Item/Rate │  │   Money   │  │  engine   │  │   rules   │  │   │
//! │  │   │  Person   │  │ split_even│  │   Bill    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │        ┌───────────┐  ┌───────────┐                            │   │
//! │  │        │    tip    │  │   links   │                            │   │
//! │  │        │ quick calc│  │ pay links │                            │   │
//! │  │        └───────────┘  └───────────┘                            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Person, Rate, PersonShare, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`bill`] - The mutable bill built up between calculations
//! - [`split`] - The group-dining split engine
//! - [`tip`] - Quick single-bill tip calculator
//! - [`links`] - Digital-tipping link/text assembly (no network calls)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and storage access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use split_core::money::Money;
//! use split_core::types::Rate;
//!
//! // Create money from cents (never from floats!)
//! let share = Money::from_cents(5000); // $50.00
//!
//! // Apply a rate with half-up rounding
//! let tax_rate = Rate::from_percentage(8.875); // NYC sales tax
//! let tax = share.apply_rate(tax_rate);
//!
//! // Tax on $50.00 at 8.875% = $4.44 (rounded)
//! assert_eq!(tax.cents(), 444);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod error;
pub mod links;
pub mod money;
pub mod split;
pub mod tip;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use split_core::Money` instead of
// `use split_core::money::Money`

pub use bill::Bill;
pub use error::{SplitError, SplitResult, ValidationError};
pub use money::Money;
pub use split::compute_split;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed on a single bill
///
/// ## Business Reason
/// Prevents runaway bills and keeps the O(items × people) calculation
/// bounded by what the UI can sensibly render.
pub const MAX_BILL_ITEMS: usize = 100;

/// Maximum people in a single party
///
/// ## Business Reason
/// The widget targets restaurant tables, not banquets; fifty covers any
/// realistic group-dining page session.
pub const MAX_PARTY_SIZE: usize = 50;

/// Maximum tax or service-charge rate, in milli-percent (100%)
pub const MAX_BILL_RATE_MPCT: u32 = 100_000;

/// Maximum personal tip rate, in milli-percent (300%)
///
/// ## Business Reason
/// Looser than the tax cap because outsized tips are legitimate, but still
/// catches "2000" typed into a percent field meant to hold "20".
pub const MAX_TIP_RATE_MPCT: u32 = 300_000;
