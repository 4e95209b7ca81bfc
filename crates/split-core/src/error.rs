//! # Error Types
//!
//! Domain-specific error types for split-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  split-core errors (this file)                                         │
//! │  ├── SplitError       - Bill-split domain errors                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  split-session errors (separate crate)                                 │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → SplitError → ApiError → Frontend              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant below is raised synchronously, before any computation
//! proceeds. The engine performs no partial computation and no recovery:
//! validation is all-or-nothing, and a failed call produces no results.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, person id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Split Error
// =============================================================================

/// Bill-split domain errors.
///
/// These errors represent invalid input to the split engine or to bill
/// mutation operations. They should be caught and translated to
/// user-friendly messages by the presentation layer.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The bill has items but nobody to split them between.
    ///
    /// ## When This Occurs
    /// - `compute_split` called on a bill with items and an empty party
    ///
    /// Dividing a shared item by a party of zero is the classic NaN bug in
    /// naive splitters; we refuse the input instead.
    #[error("Add at least one person before splitting the bill")]
    EmptyPeople,

    /// A shared item where every person is individually assigned to it,
    /// leaving nobody to share the remainder with.
    #[error("Shared item '{item}' has no one left to share it")]
    NoEligibleSharers { item: String },

    /// An exclusive (non-shared) item with no assignees.
    ///
    /// ## When This Occurs
    /// - An item was added with `shared = false` but never assigned
    ///
    /// Allowing this would silently drop the item's price from everyone's
    /// share and the per-person totals would no longer sum to the bill.
    #[error("Item '{item}' is not shared and not assigned to anyone")]
    UnassignedItem { item: String },

    /// An item's assignment list references a person id that is not in the
    /// party.
    #[error("Item '{item}' is assigned to unknown person {person_id}")]
    UnknownPerson { item: String, person_id: String },

    /// Person cannot be found in the bill.
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    /// Item cannot be found in the bill.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Bill has exceeded the maximum allowed items.
    #[error("Bill cannot have more than {max} items")]
    TooManyItems { max: usize },

    /// Party has exceeded the maximum allowed size.
    #[error("Party cannot have more than {max} people")]
    TooManyPeople { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied fields don't meet requirements.
/// Used for early validation before any allocation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Monetary amount is negative.
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two items with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with SplitError.
pub type SplitResult<T> = Result<T, SplitError>;

// =============================================================================
// Unit Tests
// =============================================================================
